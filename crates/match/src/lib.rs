//! Tokenizer and whole-word matcher
//!
//! This crate provides:
//! - tokenize: string + options → ordered term sequence
//! - matches: positional whole-word containment predicate
//! - Extractor trait and FullWordExtractor candidate filter
//!
//! All operations are total, deterministic, pure functions over strings;
//! there are no failure modes and no shared state across calls.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod extractor;
pub mod matcher;
pub mod tokenizer;

// Re-export commonly used items
pub use extractor::{filter_matching_inputs, Extractor, FullWordExtractor};
pub use matcher::{matches, Anchor};
pub use tokenizer::tokenize;
