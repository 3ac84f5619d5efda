//! Error types for the TextQuest system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result alias used across TextQuest crates.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for TextQuest operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional note about where the error occurred (file, plugin, room).
    pub context: Option<String>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Creates an I/O error for the given path.
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::new(ErrorKind::Io {
            path: path.into(),
            source,
        })
    }

    /// Creates an error for a failed write of game text.
    #[must_use]
    pub fn output(source: io::Error) -> Self {
        Self::new(ErrorKind::Output(source))
    }

    /// Creates an invalid world error.
    #[must_use]
    pub fn invalid_world(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidWorld(message.into()))
    }

    /// Creates an error for a plugin that subscribed before being bound.
    #[must_use]
    pub fn plugin_not_bound(plugin: impl Into<String>) -> Self {
        Self::new(ErrorKind::PluginNotBound {
            plugin: plugin.into(),
        })
    }

    /// Creates an error for a plugin bound to a dispatcher twice.
    #[must_use]
    pub fn plugin_already_bound(plugin: impl Into<String>) -> Self {
        Self::new(ErrorKind::PluginAlreadyBound {
            plugin: plugin.into(),
        })
    }

    /// Creates an unknown plugin error.
    #[must_use]
    pub fn unknown_plugin(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownPlugin(name.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Reading or writing a file failed.
    #[error("failed to access {}: {source}", path.display())]
    Io {
        /// The path being accessed.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A world file is not valid YAML for the world schema.
    #[error("invalid world file {}: {source}", path.display())]
    Yaml {
        /// The world file.
        path: PathBuf,
        /// The underlying YAML error.
        #[source]
        source: serde_yaml::Error,
    },

    /// An item catalog is not valid JSON for the item schema.
    #[error("invalid item catalog {}: {source}", path.display())]
    Json {
        /// The item catalog file.
        path: PathBuf,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The loaded world breaks a referential invariant.
    #[error("invalid world: {0}")]
    InvalidWorld(String),

    /// No plugin with this name is known.
    #[error("unknown plugin: {0}")]
    UnknownPlugin(String),

    /// A plugin called `subscribe` before it was bound to a dispatcher.
    #[error("plugin '{plugin}' is not bound: subscribe is only available after binding")]
    PluginNotBound {
        /// The plugin name.
        plugin: String,
    },

    /// A plugin was bound to a dispatcher more than once.
    #[error("plugin '{plugin}' is already bound to a dispatcher")]
    PluginAlreadyBound {
        /// The plugin name.
        plugin: String,
    },

    /// Scaffolding target already exists.
    #[error("project directory already exists: {}", .0.display())]
    ProjectExists(PathBuf),

    /// Writing game text to the output failed.
    #[error("failed to write game output: {0}")]
    Output(#[source] io::Error),

    /// The line editor failed.
    #[error("line editor error: {0}")]
    Editor(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}
