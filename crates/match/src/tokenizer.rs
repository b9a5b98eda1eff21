//! Tokenizer for whole-word matching
//!
//! Splits a string into an ordered sequence of terms: plain words and
//! compound word groups. The split is total and deterministic; the empty
//! string and separator-only strings produce an empty sequence.
//!
//! Normalization first rewrites every alternate separator to the
//! canonical alt-separator and collapses whitespace runs to a single
//! primary separator. Parts are then split on the primary separator and
//! each part is examined for alt-separator grouping and camelCase
//! structure.

use fullword_core::{
    is_alt_separator, SplitOptions, Term, TokenSequence, ALT_SEPARATOR, PRIMARY_SEPARATOR,
};

/// Tokenize text into an ordered term sequence
///
/// Grouping policy is controlled by [`SplitOptions`]:
/// - `flatten` discards grouping, returning every word as its own term.
/// - `require_group` wraps an all-word result into a single group.
/// - When the string uses alt-separators as its only separators
///   (alt-primary mode, e.g. `"big-tits"` as opposed to `"big tits"`),
///   groups are flattened unless `require_group` is set.
///
/// # Example
///
/// ```
/// use fullword_core::{SplitOptions, Term};
/// use fullword_match::tokenizer::tokenize;
///
/// let seq = tokenize("Jane Doe", SplitOptions::compare(false));
/// assert_eq!(seq.terms(), &[Term::word("Jane"), Term::word("Doe")]);
///
/// let seq = tokenize("big-tits", SplitOptions::query());
/// assert_eq!(seq.terms(), &[Term::group(["big", "tits"])]);
/// ```
pub fn tokenize(text: &str, opts: SplitOptions) -> TokenSequence {
    let normalized = normalize_separators(text);

    // Alt-primary mode: the alt-separator is the only separator present.
    let alt_primary = !normalized.contains(PRIMARY_SEPARATOR) && normalized.contains(ALT_SEPARATOR);

    let trimmed = trim_alt_edges(&normalized);

    let mut terms: Vec<Term> = trimmed
        .split(PRIMARY_SEPARATOR)
        .filter(|part| !part.is_empty() && !part.chars().all(|ch| ch == ALT_SEPARATOR))
        .map(split_part)
        .collect();

    let has_group = terms.iter().any(Term::is_group);

    if opts.flatten || (alt_primary && !opts.require_group && has_group) {
        terms = into_words(terms).into_iter().map(Term::Word).collect();
    } else if opts.require_group && !terms.is_empty() && !has_group {
        terms = vec![Term::Group(into_words(terms))];
    }

    tracing::trace!(
        input = text,
        terms = terms.len(),
        alt_primary,
        "tokenized input"
    );

    TokenSequence::new(terms)
}

/// Rewrite alternate separators to the canonical alt-separator, collapse
/// whitespace runs to one primary separator, and collapse alt-separator
/// runs to one alt-separator.
fn normalize_separators(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_primary = false;
    let mut prev_alt = false;
    for ch in text.chars() {
        if ch.is_whitespace() {
            if !prev_primary {
                out.push(PRIMARY_SEPARATOR);
            }
            prev_primary = true;
            prev_alt = false;
        } else if is_alt_separator(ch) {
            if !prev_alt {
                out.push(ALT_SEPARATOR);
            }
            prev_alt = true;
            prev_primary = false;
        } else {
            out.push(ch);
            prev_primary = false;
            prev_alt = false;
        }
    }
    out
}

/// Trim a leading/trailing alt-separator that isn't part of a real
/// boundary. Runs are already collapsed, so one strip per edge suffices.
fn trim_alt_edges(normalized: &str) -> &str {
    let trimmed = normalized.strip_prefix(ALT_SEPARATOR).unwrap_or(normalized);
    trimmed.strip_suffix(ALT_SEPARATOR).unwrap_or(trimmed)
}

/// Split one primary-separated part into a term
fn split_part(part: &str) -> Term {
    if let Some(words) = alt_group_words(part) {
        return Term::Group(words);
    }
    match camel_case_words(part) {
        Some(words) => Term::Group(words),
        None => Term::Word(part.to_string()),
    }
}

/// Split a part that is strictly alt-separator-delimited sub-words.
///
/// Each sub-word is further decomposed by the camelCase splitter, and the
/// pieces flatten into the same group; sub-words never nest.
fn alt_group_words(part: &str) -> Option<Vec<String>> {
    if !part.contains(ALT_SEPARATOR)
        || part.starts_with(ALT_SEPARATOR)
        || part.ends_with(ALT_SEPARATOR)
    {
        return None;
    }

    let mut words = Vec::new();
    for sub in part.split(ALT_SEPARATOR) {
        match camel_case_words(sub) {
            Some(pieces) => words.extend(pieces),
            None => words.push(sub.to_string()),
        }
    }
    Some(words)
}

/// Split a part by upper/lower camelCase, or report that it is atomic
fn camel_case_words(part: &str) -> Option<Vec<String>> {
    pascal_case_words(part).or_else(|| lower_camel_words(part))
}

/// PascalCase: two or more capitalized segments covering the whole part
fn pascal_case_words(part: &str) -> Option<Vec<String>> {
    let words = capitalized_segments(part)?;
    if words.len() >= 2 {
        Some(words)
    } else {
        None
    }
}

/// lower camelCase: a lowercase run followed by one or more capitalized
/// segments, covering the whole part
fn lower_camel_words(part: &str) -> Option<Vec<String>> {
    let split_at = part.find(|ch: char| !ch.is_ascii_lowercase())?;
    if split_at == 0 {
        return None;
    }
    let (head, rest) = part.split_at(split_at);
    let mut words = vec![head.to_string()];
    words.extend(capitalized_segments(rest)?);
    Some(words)
}

/// Parse `input` as a run of capitalized segments, each one ASCII
/// uppercase letter followed by one or more ASCII lowercase letters.
/// The segments must cover the input exactly.
fn capitalized_segments(input: &str) -> Option<Vec<String>> {
    if input.is_empty() {
        return None;
    }
    let mut words = Vec::new();
    let mut current = String::new();
    for ch in input.chars() {
        if ch.is_ascii_uppercase() {
            if !current.is_empty() {
                if current.len() < 2 {
                    return None;
                }
                words.push(std::mem::take(&mut current));
            }
            current.push(ch);
        } else if ch.is_ascii_lowercase() {
            if current.is_empty() {
                return None;
            }
            current.push(ch);
        } else {
            return None;
        }
    }
    if current.len() < 2 {
        return None;
    }
    words.push(current);
    Some(words)
}

/// Flatten terms into their member words, preserving order
fn into_words(terms: Vec<Term>) -> Vec<String> {
    let mut words = Vec::new();
    for term in terms {
        match term {
            Term::Word(word) => words.push(word),
            Term::Group(group) => words.extend(group),
        }
    }
    words
}

// ============================================================================
// Tests
// ============================================================================
