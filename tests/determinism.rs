//! Determinism and consistency tests
//!
//! Validates that tokenization, matching, and filtering are pure:
//! identical inputs always yield identical outputs, and repeated
//! evaluation never changes a verdict or the result order.

use fullword::{
    filter_matching_inputs, matches, tokenize, FullWordMatcherOptions, SplitOptions,
};

// ============================================================================
// Test Helpers
// ============================================================================

const LABELS: [&str; 6] = [
    "Jane Doe",
    "BigTitsRedhead",
    "red_head",
    "big-tits blonde",
    "mrs jane doe smith",
    "",
];

const QUERIES: [&str; 6] = ["Jane", "jane doe", "big-tits", "redhead", "Jan", ""];

// ============================================================================
// Tokenizer Determinism
// ============================================================================

/// Same string and options produce an identical sequence every time
#[test]
fn test_tokenize_deterministic() {
    for label in LABELS {
        for opts in [
            SplitOptions::query(),
            SplitOptions::compare(false),
            SplitOptions::compare(true),
        ] {
            let first = tokenize(label, opts);
            for _ in 0..5 {
                assert_eq!(
                    tokenize(label, opts),
                    first,
                    "tokenize should be deterministic for {label:?}"
                );
            }
        }
    }
}

// ============================================================================
// Matcher Determinism
// ============================================================================

/// Same sequences produce the same verdict every time
#[test]
fn test_matches_deterministic() {
    for query in QUERIES {
        for label in LABELS {
            let input = tokenize(query, SplitOptions::query());
            let compare = tokenize(label, SplitOptions::compare(false));

            let verdict = matches(&input, &compare);
            for _ in 0..5 {
                assert_eq!(
                    matches(&input, &compare),
                    verdict,
                    "verdict should be stable for {query:?} in {label:?}"
                );
            }
        }
    }
}

/// Matching reads the sequences without altering them
#[test]
fn test_matches_leaves_sequences_untouched() {
    let input = tokenize("big-tits", SplitOptions::query());
    let compare = tokenize("big-tits blonde", SplitOptions::compare(false));

    let input_before = input.clone();
    let compare_before = compare.clone();
    let _ = matches(&input, &compare);

    assert_eq!(input, input_before);
    assert_eq!(compare, compare_before);
}

// ============================================================================
// Filter Determinism
// ============================================================================

/// Same request produces identical results, in identical order
#[test]
fn test_filter_deterministic() {
    for label in LABELS {
        let first = filter_matching_inputs(&QUERIES, label, FullWordMatcherOptions::default());
        for _ in 0..5 {
            assert_eq!(
                filter_matching_inputs(&QUERIES, label, FullWordMatcherOptions::default()),
                first,
                "filter output should be stable for {label:?}"
            );
        }
    }
}

/// The filter verdict for an input does not depend on its neighbors
#[test]
fn test_filter_is_pointwise() {
    for label in LABELS {
        let batched = filter_matching_inputs(&QUERIES, label, FullWordMatcherOptions::default());
        let singly: Vec<&str> = QUERIES
            .iter()
            .copied()
            .filter(|query| {
                !filter_matching_inputs(&[query], label, FullWordMatcherOptions::default())
                    .is_empty()
            })
            .collect();
        assert_eq!(
            batched, singly,
            "batched and per-input filtering should agree for {label:?}"
        );
    }
}
