//! Command parser for text adventure input.
//!
//! This crate turns a raw line such as `"usa chiave con porta"` into an
//! [`Action`] the dispatcher can route.
//!
//! # Architecture
//!
//! ```text
//! "usa chiave con porta"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   TOKENIZER     │  → ["usa", "chiave", "con", "porta"]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ VOCABULARY      │  → "usa" resolves to canonical `use`
//! │ LOOKUP          │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ OBJECT          │  → target "chiave", indirect "porta"
//! │ EXTRACTION      │
//! └─────────────────┘
//! ```
//!
//! Parsing never fails: unknown verbs pass through unchanged so plugins can
//! claim them, and empty input becomes `help`.
//!
//! # Modules
//!
//! - [`action`] - The parsed [`Action`] and the canonical [`Command`] set
//! - [`tokenizer`] - Convert raw input to a token stream
//! - [`vocabulary`] - Verb synonym table
//! - [`parser`] - Parser pipeline
//! - [`stdlib`] - Standard English/Italian vocabulary

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod action;
pub mod parser;
pub mod stdlib;
pub mod tokenizer;
pub mod vocabulary;

// Re-export main types for convenience
pub use action::{Action, Command};
pub use parser::Parser;
pub use vocabulary::{Verb, Vocabulary};
