//! Integration tests for the textquest_engine crate.
//!
//! Tests for command dispatch and plugin hooks:
//! - Built-in handlers against a shared world
//! - Plugin binding and priority
//! - Movement, inventory, and mission properties

mod dispatch_tests;
mod properties;
