//! Core data model for whole-word token matching
//!
//! This crate provides:
//! - Term and TokenSequence value types
//! - The separator canon used by normalization and flattening
//! - Option types for tokenization and filtering
//!
//! No algorithm code lives here; tokenization and matching are in the
//! `fullword-match` crate.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod options;
pub mod separator;
pub mod term;

// Re-export commonly used types
pub use options::{FullWordMatcherOptions, SplitOptions};
pub use separator::{is_alt_separator, ALT_SEPARATOR, ALT_SEPARATORS, PRIMARY_SEPARATOR};
pub use term::{Term, TokenSequence};
