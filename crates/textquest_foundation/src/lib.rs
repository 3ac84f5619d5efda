//! Core error types for TextQuest.
//!
//! This crate provides:
//! - [`Error`] - Rich error type with optional context
//! - [`ErrorKind`] - Categorized failure kinds
//! - [`Result`] - Result alias used across the workspace
//!
//! Player-facing conditions (unknown commands, missing items, blocked exits)
//! are never errors; they are answered with text by the dispatcher. The types
//! here cover loading, plugin wiring, and terminal failures.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;

pub use error::{Error, ErrorKind, Result};
