//! Term types for whole-word matching
//!
//! This module defines:
//! - Term: tagged union of a single word or a compound word group
//! - TokenSequence: immutable ordered sequence of terms
//!
//! Both are value objects: created fresh per tokenize call, compared by
//! value, never mutated after construction. The matcher narrows a
//! sequence only through suffix views, it never rewrites the contents.

use serde::{Deserialize, Serialize};

// ============================================================================
// Term
// ============================================================================

/// Atomic unit of a tokenized string
///
/// A `Word` is a single token. A `Group` is an ordered, non-empty list of
/// words that together form one compound token (a camelCase or
/// hyphen-joined name). A group is atomic when compared against another
/// group, but decomposable when searched for inside a flattened compare
/// sequence.
///
/// Word equality is decided case-insensitively by the matcher; the term
/// itself stores the original casing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Term {
    /// A single word token
    Word(String),
    /// An ordered, non-empty list of words forming one compound token
    Group(Vec<String>),
}

impl Term {
    /// Create a word term
    pub fn word(text: impl Into<String>) -> Self {
        Term::Word(text.into())
    }

    /// Create a group term from its member words
    pub fn group<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Term::Group(words.into_iter().map(Into::into).collect())
    }

    /// Check if this term is a group
    pub fn is_group(&self) -> bool {
        matches!(self, Term::Group(_))
    }

    /// Number of words carried by this term (1 for a word)
    pub fn word_count(&self) -> usize {
        match self {
            Term::Word(_) => 1,
            Term::Group(words) => words.len(),
        }
    }
}

// ============================================================================
// TokenSequence
// ============================================================================

/// Immutable ordered sequence of terms produced by one tokenize call
///
/// A sequence is read-only once produced. Matching walks it through
/// suffix views (`&[Term]`), advancing a cursor monotonically; consumed
/// terms are never revisited.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSequence(Vec<Term>);

impl TokenSequence {
    /// Create a sequence from its terms
    pub fn new(terms: Vec<Term>) -> Self {
        TokenSequence(terms)
    }

    /// Number of terms in the sequence
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the sequence holds no terms
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the terms as a slice (the root suffix view)
    pub fn terms(&self) -> &[Term] {
        &self.0
    }

    /// Iterate over the terms in order
    pub fn iter(&self) -> std::slice::Iter<'_, Term> {
        self.0.iter()
    }

    /// Check if any term in the sequence is a group
    pub fn contains_group(&self) -> bool {
        self.0.iter().any(Term::is_group)
    }
}

impl From<Vec<Term>> for TokenSequence {
    fn from(terms: Vec<Term>) -> Self {
        TokenSequence::new(terms)
    }
}

impl<'a> IntoIterator for &'a TokenSequence {
    type Item = &'a Term;
    type IntoIter = std::slice::Iter<'a, Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// ============================================================================
// Tests
// ============================================================================
