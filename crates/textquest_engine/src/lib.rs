//! Event dispatcher, built-in command handlers, and plugin hooks.
//!
//! This crate provides:
//! - [`EventBus`] - Named events with ordered, first-responder-wins callbacks
//! - [`EventDispatcher`] - Per-turn command resolution over the bus
//! - [`Plugin`] - The plugin contract, bound through [`PluginRegistry`]
//! - [`sweep_missions`] - Mission completion check run after every command
//!
//! # Command resolution
//!
//! ```text
//! Action { command: "use", target: "torch" }
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ command_use     │  → first plugin answering Some(..) wins
//! │ HOOKS           │
//! └─────────────────┘
//!          │ (all None)
//!          ▼
//! ┌─────────────────┐
//! │ BUILT-IN        │  → help, look, inventory, move, take, drop,
//! │ HANDLERS        │    use, save, load, missions, stats, exit
//! └─────────────────┘
//!          │ (not canonical)
//!          ▼
//!   "Unrecognized command: ..."
//! ```
//!
//! Everything runs on one thread: the bus is `Rc`-shared and callbacks
//! receive `&mut` state and world for the duration of a single call.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod bus;
pub mod dispatcher;
pub mod handlers;
pub mod missions;
pub mod plugin;

pub use bus::{Callback, EventBus, POST_ACTION, PRE_ACTION, command_event};
pub use dispatcher::EventDispatcher;
pub use missions::sweep_missions;
pub use plugin::{Hooks, Plugin, PluginLink, PluginRegistry, bind};
