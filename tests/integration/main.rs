//! Cross-layer integration tests for TextQuest.
//!
//! Tests that drive whole sessions through the game loop:
//! - Scripted scenarios against small worlds
//! - The bundled demo adventure
//! - Scaffolded projects

mod demo_adventure;
mod scenarios;
mod support;
