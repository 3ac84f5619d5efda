//! World read model, session state, and world loading for TextQuest.
//!
//! This crate provides:
//! - [`World`] - Authored content: rooms, items, NPCs, missions
//! - [`State`] - Mutable per-session progress
//! - [`load_world`] - YAML/JSON loader with referential validation
//!
//! The world is read-mostly: plugins may move items in and out of rooms
//! while a session runs. Access is single-writer; only one turn executes at
//! a time, so neither type carries synchronization.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod loader;
pub mod model;
pub mod state;
pub mod world;

pub use loader::{load_world, ITEMS_FILE};
pub use model::{DialogueNode, DialogueOption, Item, Mission, Npc, Rewards, Room};
pub use state::{MissionStatus, State};
pub use world::{World, WorldConfig};
