//! Candidate filtering over the whole-word predicate
//!
//! This module provides:
//! - Extractor trait for pluggable candidate filtering
//! - FullWordExtractor, the whole-word implementation
//! - filter_matching_inputs convenience entry point
//!
//! The extractor is stateless apart from its options: the compare string
//! is tokenized once per call and every input is tested against it in
//! original order. Output preserves input order and multiplicity; there
//! is no sorting, no scoring, no deduplication. A candidate that fails
//! to match is simply omitted.

use fullword_core::{FullWordMatcherOptions, SplitOptions};

use crate::matcher::matches;
use crate::tokenizer::tokenize;

// ============================================================================
// Extractor Trait
// ============================================================================

/// Pluggable candidate-filtering interface
///
/// An extractor takes the user's query tokens and one candidate string
/// and returns the subset of tokens that occur in the candidate.
///
/// # Thread Safety
///
/// Extractors must be Send + Sync so independent candidates can be
/// evaluated concurrently.
pub trait Extractor: Send + Sync {
    /// Keep every input that matches the compare string
    ///
    /// The returned subsequence preserves the order and multiplicity of
    /// `inputs`.
    fn filter_matching_inputs<'a>(&self, inputs: &[&'a str], compare: &str) -> Vec<&'a str>;

    /// Name for debugging and logging
    fn name(&self) -> &str;
}

// ============================================================================
// FullWordExtractor
// ============================================================================

/// Whole-word candidate filter
///
/// Tokenizes the compare string once, then tests every input for
/// whole-word (or whole compound) containment, case-insensitively.
///
/// # Example
///
/// ```
/// use fullword_core::FullWordMatcherOptions;
/// use fullword_match::extractor::{Extractor, FullWordExtractor};
///
/// let extractor = FullWordExtractor::new(FullWordMatcherOptions::default());
/// let kept = extractor.filter_matching_inputs(&["Jane", "Jan"], "Jane Doe");
/// assert_eq!(kept, vec!["Jane"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FullWordExtractor {
    options: FullWordMatcherOptions,
}

impl FullWordExtractor {
    /// Create an extractor with the given options
    pub fn new(options: FullWordMatcherOptions) -> Self {
        FullWordExtractor { options }
    }

    /// Check a labeled item with aliases against the query tokens
    ///
    /// True when every input matches the item's name or a single alias.
    /// This is the dropdown predicate: an item stays listed as long as
    /// one of its surface forms carries all query tokens.
    pub fn matches_item(&self, inputs: &[&str], name: &str, aliases: &[&str]) -> bool {
        std::iter::once(name)
            .chain(aliases.iter().copied())
            .any(|candidate| self.filter_matching_inputs(inputs, candidate).len() == inputs.len())
    }
}

impl Extractor for FullWordExtractor {
    fn filter_matching_inputs<'a>(&self, inputs: &[&'a str], compare: &str) -> Vec<&'a str> {
        let compare_terms = tokenize(
            compare,
            SplitOptions::compare(self.options.flatten_word_groups),
        );

        let kept: Vec<&str> = inputs
            .iter()
            .copied()
            .filter(|input| {
                let input_terms = tokenize(input, SplitOptions::query());
                matches(&input_terms, &compare_terms)
            })
            .collect();

        tracing::trace!(
            compare,
            candidates = inputs.len(),
            kept = kept.len(),
            "filtered inputs"
        );

        kept
    }

    fn name(&self) -> &str {
        "full-word"
    }
}

/// Filter `inputs` down to those matching `compare` as whole words
///
/// One-shot form of [`Extractor::filter_matching_inputs`] over a
/// [`FullWordExtractor`].
pub fn filter_matching_inputs<'a>(
    inputs: &[&'a str],
    compare: &str,
    options: FullWordMatcherOptions,
) -> Vec<&'a str> {
    FullWordExtractor::new(options).filter_matching_inputs(inputs, compare)
}

// ============================================================================
// Tests
// ============================================================================
