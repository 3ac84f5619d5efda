//! Named events with ordered callbacks.
//!
//! Events are plain strings: `pre_action`, `post_action`, and
//! `command_<name>` for each command. Callbacks run in subscription order
//! and the first one to answer `Some` wins; later callbacks are not invoked.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::{Rc, Weak};

use textquest_parser::Action;
use textquest_world::{State, World};
use tracing::debug;

/// Event emitted before a turn is dispatched. An answer vetoes the turn.
pub const PRE_ACTION: &str = "pre_action";

/// Event emitted after a turn. Answers are ignored by the game loop.
pub const POST_ACTION: &str = "post_action";

/// A subscribed callback.
pub type Callback = Rc<dyn Fn(&Action, &mut State, &mut World) -> Option<String>>;

type Subscribers = HashMap<String, Vec<Callback>>;

/// Name of the per-command hook event.
#[must_use]
pub fn command_event(command: &str) -> String {
    format!("command_{command}")
}

/// Shared event registry.
///
/// Cloning yields another handle to the same registry.
#[derive(Clone, Default)]
pub struct EventBus {
    subscribers: Rc<RefCell<Subscribers>>,
}

impl EventBus {
    /// Creates an empty bus.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a callback to an event.
    pub fn subscribe<F>(&self, event: impl Into<String>, callback: F)
    where
        F: Fn(&Action, &mut State, &mut World) -> Option<String> + 'static,
    {
        self.subscribe_callback(event, Rc::new(callback));
    }

    /// Appends an already shared callback to an event.
    pub fn subscribe_callback(&self, event: impl Into<String>, callback: Callback) {
        let event = event.into();
        let mut subscribers = self.subscribers.borrow_mut();
        let callbacks = subscribers.entry(event.clone()).or_default();
        callbacks.push(callback);
        debug!(event = %event, position = callbacks.len(), "subscribed callback");
    }

    /// Invokes an event's callbacks in order until one answers.
    ///
    /// Callbacks may subscribe further callbacks while running; those take
    /// part from the next emit on.
    pub fn emit(
        &self,
        event: &str,
        action: &Action,
        state: &mut State,
        world: &mut World,
    ) -> Option<String> {
        let callbacks = self.callbacks(event);
        let answer = callbacks
            .iter()
            .enumerate()
            .find_map(|(index, callback)| {
                callback(action, state, world).map(|answer| (index, answer))
            });

        match answer {
            Some((index, answer)) => {
                debug!(event, responder = index, "event answered");
                Some(answer)
            }
            None => {
                debug!(event, callbacks = callbacks.len(), "event unanswered");
                None
            }
        }
    }

    /// Number of callbacks subscribed to an event.
    #[must_use]
    pub fn subscriber_count(&self, event: &str) -> usize {
        self.subscribers.borrow().get(event).map_or(0, Vec::len)
    }

    /// Names of events with at least one subscriber, sorted.
    #[must_use]
    pub fn events(&self) -> Vec<String> {
        let mut events: Vec<String> = self.subscribers.borrow().keys().cloned().collect();
        events.sort();
        events
    }

    /// Creates a handle that does not keep the registry alive.
    #[must_use]
    pub fn downgrade(&self) -> WeakEventBus {
        WeakEventBus {
            subscribers: Rc::downgrade(&self.subscribers),
        }
    }

    /// Snapshot of an event's callbacks, so none is borrowed while running.
    fn callbacks(&self, event: &str) -> Vec<Callback> {
        self.subscribers
            .borrow()
            .get(event)
            .cloned()
            .unwrap_or_default()
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let subscribers = self.subscribers.borrow();
        let mut map = f.debug_map();
        for event in self.events() {
            map.entry(&event, &subscribers.get(&event).map_or(0, Vec::len));
        }
        map.finish()
    }
}

/// A non-owning handle to an [`EventBus`].
///
/// Plugins hold one of these so the bus (which holds the plugins'
/// callbacks) and the plugins do not keep each other alive.
#[derive(Clone, Debug, Default)]
pub struct WeakEventBus {
    subscribers: Weak<RefCell<Subscribers>>,
}

impl WeakEventBus {
    /// Returns the bus if it still exists.
    #[must_use]
    pub fn upgrade(&self) -> Option<EventBus> {
        self.subscribers
            .upgrade()
            .map(|subscribers| EventBus { subscribers })
    }
}
