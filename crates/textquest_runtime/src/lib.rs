//! Game loop, line editing, scaffolding, and CLI for TextQuest.
//!
//! This crate provides:
//! - [`Game`] - One play session: world, state, parser, dispatcher, plugins
//! - [`Repl`] - The interactive read-dispatch-print loop
//! - [`init_project`] - Scaffolding for a new adventure

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod editor;
pub mod game;
pub mod repl;
pub mod scaffold;

pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use game::{Game, Turn};
pub use repl::{LoopState, Repl};
pub use scaffold::init_project;
