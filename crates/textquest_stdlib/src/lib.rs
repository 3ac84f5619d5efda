//! Bundled plugins for TextQuest.
//!
//! - [`LightPlugin`] - A dark room that stays unseen until a light is lit
//! - [`DialoguePlugin`] - `talk <npc>` walks an NPC's dialogue nodes
//!
//! [`catalog`] resolves plugin names from world files and the command line.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod catalog;
pub mod dialogue;
pub mod light;

pub use catalog::{names, plugin, registry};
pub use dialogue::DialoguePlugin;
pub use light::LightPlugin;
