//! Option types for tokenization and filtering
//!
//! This module defines:
//! - SplitOptions: how a string is split into terms
//! - FullWordMatcherOptions: the public filter configuration

use serde::{Deserialize, Serialize};

// ============================================================================
// SplitOptions
// ============================================================================

/// How a string is split into a term sequence
///
/// The two call sites fix their own settings: query tokens are split with
/// [`SplitOptions::query`] so grouping is never lost on the input side,
/// compare strings with [`SplitOptions::compare`] where flattening is the
/// caller's choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitOptions {
    /// Wrap an all-word result into a single group
    pub require_group: bool,
    /// Discard grouping, returning every word as its own term
    pub flatten: bool,
}

impl SplitOptions {
    /// Settings for query/input tokenization: grouping is preserved and,
    /// when absent, imposed over the whole sequence.
    pub fn query() -> Self {
        SplitOptions {
            require_group: true,
            flatten: false,
        }
    }

    /// Settings for compare/label tokenization
    pub fn compare(flatten: bool) -> Self {
        SplitOptions {
            require_group: false,
            flatten,
        }
    }
}

// ============================================================================
// FullWordMatcherOptions
// ============================================================================

/// Options for the whole-word filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullWordMatcherOptions {
    /// Flatten compare-side word groups into plain words before matching
    pub flatten_word_groups: bool,
}

impl FullWordMatcherOptions {
    /// Builder: set compare-side group flattening
    pub fn with_flatten_word_groups(mut self, flatten: bool) -> Self {
        self.flatten_word_groups = flatten;
        self
    }
}

// ============================================================================
// Tests
// ============================================================================
