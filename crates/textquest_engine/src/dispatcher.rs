//! Command dispatch.

use textquest_parser::{Action, Vocabulary};
use textquest_world::{State, World};
use tracing::debug;

use crate::bus::EventBus;
use crate::handlers;

/// Resolves actions against plugin hooks and the built-in handlers.
#[derive(Debug)]
pub struct EventDispatcher {
    bus: EventBus,
    vocabulary: Vocabulary,
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new(Vocabulary::standard())
    }
}

impl EventDispatcher {
    /// Creates a dispatcher. The vocabulary is used to render `help`.
    #[must_use]
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self {
            bus: EventBus::new(),
            vocabulary,
        }
    }

    /// The underlying event bus.
    #[must_use]
    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    /// The vocabulary used for `help`.
    #[must_use]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Appends a callback to an event.
    pub fn subscribe<F>(&self, event: impl Into<String>, callback: F)
    where
        F: Fn(&Action, &mut State, &mut World) -> Option<String> + 'static,
    {
        self.bus.subscribe(event, callback);
    }

    /// Invokes an event's callbacks in order until one answers.
    pub fn emit(
        &self,
        event: &str,
        action: &Action,
        state: &mut State,
        world: &mut World,
    ) -> Option<String> {
        self.bus.emit(event, action, state, world)
    }

    /// Produces the reply to an action.
    ///
    /// The `command_<name>` hook is tried first, then the built-in handler
    /// for canonical commands. Anything else is unrecognized.
    pub fn dispatch(&self, action: &Action, state: &mut State, world: &mut World) -> String {
        if let Some(reply) = self.bus.emit(&action.event_name(), action, state, world) {
            debug!(%action, "dispatched to plugin hook");
            return reply;
        }

        match action.canonical() {
            Some(command) => {
                debug!(%action, "dispatched to built-in handler");
                handlers::handle(command, &self.vocabulary, action.target(), state, world)
            }
            None => {
                debug!(%action, "unrecognized command");
                handlers::unrecognized(action.command())
            }
        }
    }
}
