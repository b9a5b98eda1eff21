//! Positional whole-word matcher
//!
//! Decides whether every term of an input sequence occurs, in order and
//! on whole-word boundaries, inside a compare sequence. The walk keeps a
//! cursor into the compare sequence and advances it monotonically:
//! consumed compare terms are never revisited, and the first term that
//! fails to resolve aborts the walk.
//!
//! The input term at index 0 resolves [`Anchor::Start`]; every later
//! term resolves [`Anchor::Anywhere`] within the remaining suffix.
//!
//! All word comparisons are case-insensitive. The matcher is a pure
//! predicate: no side effects, no failure modes beyond "no match".

use fullword_core::{Term, TokenSequence, PRIMARY_SEPARATOR};

/// Where a term is allowed to align within the remaining compare suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// The term must align with the very start of the remaining suffix
    Start,
    /// The term may align at any position within the remaining suffix
    Anywhere,
}

/// Stand-in for a compare-side group in the flattened string. Tokenized
/// input words never contain an underscore (it is an alternate separator
/// and normalizes away), so input text cannot collide with the mask.
const GROUP_MASK: &str = "_word_group_";

/// Check whether `input` is contained in `compare` on whole-word terms
///
/// Walks the input terms in order against a shrinking suffix of the
/// compare sequence. Returns `true` only if every input term resolved.
/// An empty input sequence matches only an empty compare sequence.
///
/// # Example
///
/// ```
/// use fullword_core::SplitOptions;
/// use fullword_match::{matcher::matches, tokenizer::tokenize};
///
/// let compare = tokenize("Jane Doe", SplitOptions::compare(false));
/// let input = tokenize("jane doe", SplitOptions::query());
/// assert!(matches(&input, &compare));
///
/// let input = tokenize("Jan", SplitOptions::query());
/// assert!(!matches(&input, &compare));
/// ```
pub fn matches(input: &TokenSequence, compare: &TokenSequence) -> bool {
    if input.is_empty() {
        return compare.is_empty();
    }

    let terms = compare.terms();
    let mut cursor = 0;

    for (index, term) in input.iter().enumerate() {
        let anchor = if index == 0 {
            Anchor::Start
        } else {
            Anchor::Anywhere
        };

        match resolve_term(term, &terms[cursor..], anchor) {
            Some(consumed) => {
                tracing::trace!(?term, ?anchor, cursor, consumed, "term resolved");
                cursor += consumed;
            }
            None => {
                tracing::trace!(?term, ?anchor, cursor, "term failed to resolve");
                return false;
            }
        }
    }

    true
}

/// Resolve one input term against the compare suffix
///
/// Returns the number of suffix elements consumed (the cursor advance),
/// or `None` when the term does not occur.
fn resolve_term(term: &Term, suffix: &[Term], anchor: Anchor) -> Option<usize> {
    match term {
        Term::Word(word) => resolve_word(word, suffix, anchor),
        Term::Group(words) => resolve_group(words, suffix, anchor),
    }
}

fn resolve_word(word: &str, suffix: &[Term], anchor: Anchor) -> Option<usize> {
    match anchor {
        Anchor::Start => suffix
            .first()
            .filter(|term| word_equals(term, word))
            .map(|_| 1),
        Anchor::Anywhere => suffix
            .iter()
            .position(|term| word_equals(term, word))
            .map(|found| found + 1),
    }
}

/// A bare word can equal a word or the sole member of a length-1 group,
/// never a longer group.
fn word_equals(term: &Term, word: &str) -> bool {
    match term {
        Term::Word(other) => eq_ignore_case(other, word),
        Term::Group(members) => members.len() == 1 && eq_ignore_case(&members[0], word),
    }
}

fn resolve_group(words: &[String], suffix: &[Term], anchor: Anchor) -> Option<usize> {
    if let Some(consumed) = group_to_group(words, suffix, anchor) {
        return Some(consumed);
    }
    group_as_substring(words, suffix)
}

/// Group-to-group: a compare element that is itself a group of identical
/// length with pairwise-equal words.
fn group_to_group(words: &[String], suffix: &[Term], anchor: Anchor) -> Option<usize> {
    match anchor {
        Anchor::Start => suffix
            .first()
            .filter(|term| group_equals(term, words))
            .map(|_| 1),
        Anchor::Anywhere => suffix
            .iter()
            .position(|term| group_equals(term, words))
            .map(|found| found + 1),
    }
}

fn group_equals(term: &Term, words: &[String]) -> bool {
    match term {
        Term::Group(members) => {
            members.len() == words.len()
                && members
                    .iter()
                    .zip(words)
                    .all(|(member, word)| eq_ignore_case(member, word))
        }
        Term::Word(_) => false,
    }
}

/// Group-as-substring: flatten the compare suffix into one lowercase
/// string (groups rendered as an opaque mask) and look for the flattened
/// input group as a contiguous substring. The match is accepted only
/// when its start and end offsets land exactly on word boundaries of the
/// flattened string; partial-word overlaps are rejected.
fn group_as_substring(words: &[String], suffix: &[Term]) -> Option<usize> {
    if suffix.is_empty() {
        return None;
    }

    let flat_words: Vec<String> = suffix
        .iter()
        .map(|term| match term {
            Term::Word(word) => word.to_lowercase(),
            Term::Group(_) => GROUP_MASK.to_string(),
        })
        .collect();
    let flat_compare = flat_words.join(&PRIMARY_SEPARATOR.to_string());

    let flat_input = words
        .iter()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join(&PRIMARY_SEPARATOR.to_string());

    let start = flat_compare.find(&flat_input)?;
    let end = start + flat_input.len();

    let mut offset = 0;
    let mut start_word = None;
    let mut end_word = None;
    for (index, word) in flat_words.iter().enumerate() {
        if offset == start {
            start_word = Some(index);
        }
        if offset + word.len() == end {
            end_word = Some(index);
        }
        offset += word.len() + 1;
    }

    // Both boundaries aligned: the span covers whole compare elements
    // from start_word through end_word inclusive.
    start_word?;
    let last = end_word?;
    Some(last + 1)
}

/// Case-insensitive string equality without allocating
fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

// ============================================================================
// Tests
// ============================================================================
