//! Integration tests for the textquest_parser crate.
//!
//! Tests for the command parsing pipeline:
//! - Vocabulary lookup
//! - Full parser pipeline
//! - Parser properties

mod properties;
mod vocabulary_tests;
