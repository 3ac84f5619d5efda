//! TextQuest - Text-adventure interpreter with plugin hooks
//!
//! This crate re-exports all layers of the TextQuest system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: textquest_runtime    - Game loop, line editing, scaffolding, CLI
//!          textquest_stdlib     - Bundled plugins (light, dialogue)
//! Layer 3: textquest_engine     - Event bus, dispatcher, plugin contract, missions
//! Layer 2: textquest_parser     - Tokenizer, vocabulary, action extraction
//! Layer 1: textquest_world      - Rooms, items, NPCs, missions, state, loader
//! Layer 0: textquest_foundation - Error types
//! ```

pub use textquest_engine as engine;
pub use textquest_foundation as foundation;
pub use textquest_parser as parser;
pub use textquest_runtime as runtime;
pub use textquest_stdlib as stdlib;
pub use textquest_world as world;
