//! Behavioral scenarios for the whole-word filter
//!
//! End-to-end checks of the filtering predicate through the public API:
//! tokenization policy, anchored-first-term resolution, word-boundary
//! precision, and the compare-side flattening option.

use fullword::{filter_matching_inputs, FullWordExtractor, FullWordMatcherOptions};

// ============================================================================
// Test Helpers
// ============================================================================

fn filter<'a>(inputs: &[&'a str], compare: &str) -> Vec<&'a str> {
    filter_matching_inputs(inputs, compare, FullWordMatcherOptions::default())
}

fn filter_flat<'a>(inputs: &[&'a str], compare: &str) -> Vec<&'a str> {
    filter_matching_inputs(
        inputs,
        compare,
        FullWordMatcherOptions::default().with_flatten_word_groups(true),
    )
}

// ============================================================================
// Whole-Word Filtering
// ============================================================================

/// Whole words and whole spans match; prefixes and reversals do not
#[test]
fn test_plain_name_filtering() {
    let kept = filter(&["Jane", "jane doe", "Doe Jane", "Jan"], "Jane Doe");
    assert_eq!(
        kept,
        vec!["Jane", "jane doe"],
        "only whole-word, in-order candidates should survive"
    );
}

/// A word that only occurs inside another word is rejected
#[test]
fn test_word_boundary_precision() {
    assert!(
        filter(&["cat"], "category").is_empty(),
        "\"cat\" occurs in \"category\" but not on word boundaries"
    );
    assert!(filter(&["category"], "category") == vec!["category"]);
}

/// Case differences never affect the verdict
#[test]
fn test_case_invariance() {
    assert_eq!(filter(&["JANE DOE"], "jane doe"), vec!["JANE DOE"]);
    assert_eq!(filter(&["jane doe"], "JANE DOE"), vec!["jane doe"]);
}

// ============================================================================
// Compound Tokens
// ============================================================================

/// A hyphenated query finds its words inside a flattened PascalCase label
#[test]
fn test_compound_query_against_flattened_camel_case_label() {
    let kept = filter_flat(&["big-tits"], "BigTitsRedhead");
    assert_eq!(kept, vec!["big-tits"]);
}

/// Without flattening, the camelCase label stays one opaque compound
#[test]
fn test_compound_query_against_grouped_camel_case_label() {
    assert!(filter(&["big-tits"], "BigTitsRedhead").is_empty());
    assert_eq!(
        filter(&["big-tits-redhead"], "BigTitsRedhead"),
        vec!["big-tits-redhead"],
        "the full compound still matches group-to-group"
    );
}

/// A fused word does not decompose to meet a split compound
#[test]
fn test_fused_word_does_not_match_split_compound() {
    assert!(filter(&["redhead"], "red_head").is_empty());
    assert!(filter_flat(&["redhead"], "red_head").is_empty());
}

// ============================================================================
// Empty Inputs
// ============================================================================

#[test]
fn test_empty_input_list() {
    let inputs: [&str; 0] = [];
    assert!(filter(&inputs, "anything").is_empty());
}

#[test]
fn test_empty_compare_rejects_nonempty_input() {
    assert!(filter(&["x"], "").is_empty());
}

#[test]
fn test_separator_only_strings_match_each_other() {
    assert_eq!(filter(&["--"], " , "), vec!["--"]);
}

// ============================================================================
// Flattened Compare
// ============================================================================

/// Flattening removes grouping ambiguity: single words, and the full
/// name, all match
#[test]
fn test_flattened_compare_accepts_each_word() {
    let kept = filter_flat(&["Jane", "Doe", "Jane Doe"], "Jane Doe");
    assert_eq!(kept, vec!["Jane", "Doe", "Jane Doe"]);
}

// ============================================================================
// Item-Level Matching
// ============================================================================

/// The dropdown predicate consults the name and every alias
#[test]
fn test_item_matching_with_aliases() {
    let extractor = FullWordExtractor::new(FullWordMatcherOptions::default());

    assert!(extractor.matches_item(&["jane"], "Jane Doe", &[]));
    assert!(extractor.matches_item(&["jd"], "Jane Doe", &["JD", "Janie"]));
    assert!(!extractor.matches_item(&["john"], "Jane Doe", &["JD", "Janie"]));
}
