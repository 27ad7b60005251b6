//! Deterministic feature detection over extracted document text.
//!
//! These are deliberately explicit scanners, not tokenizers: the boundary
//! semantics below are pinned by downstream tests and must not be tightened
//! into "smarter" matching.
//!
//! - Numeric entities: maximal runs of digits and grouping commas, with at
//!   most one trailing decimal part (`1,000,000`, `2500.75`).
//! - Date-like tokens: a digit run of exactly four starting `19` or `20`,
//!   anywhere in the text.
//! - Signature markers: case-insensitive `"signature"` / `"signed"`.
//! - Keyword presence: substring containment against the fixed table in
//!   [`keywords`].

pub mod keywords;

#[cfg(test)]
mod tests;

pub use keywords::{KEYWORD_TABLE, KeywordHits, score_by_presence};

/// Features derived from a document's text, computed once per scoring call.
///
/// Derived solely from the text; never mutated after creation.
#[derive(Debug, Clone)]
pub struct FeatureVector {
    /// Count of non-overlapping numeric entities.
    pub numeric_entity_count: usize,
    /// Whether a year-like token was found.
    pub has_date: bool,
    /// Whether a signature marker was found.
    pub has_signature: bool,
    /// Summed weight of present keywords.
    pub keyword_weight: u32,
    /// Per-keyword presence flags, in table order.
    pub keyword_hits: KeywordHits,
}

impl FeatureVector {
    /// Runs every detector over `text`.
    pub fn extract(text: &str) -> Self {
        let (keyword_weight, keyword_hits) = score_by_presence(text);
        Self {
            numeric_entity_count: count_numeric_entities(text),
            has_date: has_date_like_token(text),
            has_signature: has_signature_marker(text),
            keyword_weight,
            keyword_hits,
        }
    }
}

/// Counts numeric entities: maximal runs of `[0-9,]` containing at least one
/// digit, optionally followed by exactly one `.` + digits decimal part.
///
/// Matches never overlap; a maximal match is consumed once. `1.2.3` therefore
/// counts two entities (`1.2` and `3`), and a run of bare commas counts none.
pub fn count_numeric_entities(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut count = 0;
    let mut i = 0;

    while i < bytes.len() {
        if !(bytes[i].is_ascii_digit() || bytes[i] == b',') {
            i += 1;
            continue;
        }

        let mut saw_digit = false;
        while i < bytes.len() && (bytes[i].is_ascii_digit() || bytes[i] == b',') {
            saw_digit |= bytes[i].is_ascii_digit();
            i += 1;
        }

        if !saw_digit {
            continue;
        }

        // One optional decimal part, only when a digit follows the dot.
        if i + 1 < bytes.len() && bytes[i] == b'.' && bytes[i + 1].is_ascii_digit() {
            i += 1;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
        }

        count += 1;
    }

    count
}

/// Returns `true` iff the text contains a run of exactly four digits starting
/// `19` or `20`.
///
/// Digit-bounded, not word-bounded: `a2021b` qualifies, `12021` does not
/// (five-digit run).
pub fn has_date_like_token(text: &str) -> bool {
    let bytes = text.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        if !bytes[i].is_ascii_digit() {
            i += 1;
            continue;
        }

        let start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }

        if i - start == 4 {
            let prefix = &bytes[start..start + 2];
            if prefix == b"19" || prefix == b"20" {
                return true;
            }
        }
    }

    false
}

/// Returns `true` iff the case-insensitive text contains `"signature"` or
/// `"signed"`.
pub fn has_signature_marker(text: &str) -> bool {
    let lower = text.to_lowercase();
    lower.contains("signature") || lower.contains("signed")
}
