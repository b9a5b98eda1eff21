//! Fullword - whole-word token matching for autocomplete filtering
//!
//! Fullword decides whether candidate query tokens occur as whole words
//! (or whole multi-word compounds) inside a label or tag name. It powers
//! the suggestion predicate of a search UI: the caller supplies the
//! user's query tokens and one candidate label, and receives the subset
//! of tokens the label carries.
//!
//! # Quick Start
//!
//! ```
//! use fullword::{filter_matching_inputs, FullWordMatcherOptions};
//!
//! let kept = filter_matching_inputs(
//!     &["Jane", "jane doe", "Doe Jane", "Jan"],
//!     "Jane Doe",
//!     FullWordMatcherOptions::default(),
//! );
//! assert_eq!(kept, vec!["Jane", "jane doe"]);
//! ```
//!
//! # Architecture
//!
//! The tokenizer (`fullword-match`) turns each string into an ordered
//! sequence of [`Term`]s: plain words and compound word groups split out
//! of camelCase and hyphen/underscore-joined names. The matcher walks
//! the query terms against the label terms with a monotonic cursor,
//! case-insensitively, accepting only whole-word alignments. The
//! [`FullWordExtractor`] wraps both behind the filtering entry point.
//!
//! Everything is a pure function over strings: no I/O, no shared state,
//! no error taxonomy. A candidate that does not match is omitted from
//! the result, never reported as an error.

// Re-export the public API from the member crates
pub use fullword_core::{
    FullWordMatcherOptions, SplitOptions, Term, TokenSequence, ALT_SEPARATOR, ALT_SEPARATORS,
    PRIMARY_SEPARATOR,
};
pub use fullword_match::{
    filter_matching_inputs, matches, tokenize, Anchor, Extractor, FullWordExtractor,
};
