// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The scanner: one greedy left-to-right pass over a haystack.
//!
//! At each cursor position, try every candidate in pattern order and take the
//! first one that matches (the longest, since candidates are sorted by
//! length). If none does, fall back to a single needle char. If even that
//! fails, step over the char. Once a span is committed it is never revisited.
//!
//! This is not edit distance and not longest common subsequence. It is a
//! cheap approximation of "the longest piece of the needle you can see from
//! here", which is what filter-as-you-type lists need.
//!
//! # Complexity
//!
//! O(text length × candidate count × candidate length) in the worst case,
//! no allocation beyond the folded text and the span list. Never fails.

use crate::pattern::Pattern;
use crate::types::MatchedSpan;
use crate::utils::fold_chars;
use crate::verify::contracts::check_spans_well_formed;

/// Find the matched spans of `text` for a built pattern.
///
/// Spans come back ordered and non-overlapping, with char offsets.
///
/// # Example
///
/// ```
/// use fuzzmark::{build_pattern, scan, MatchedSpan};
///
/// let pattern = build_pattern("xyz");
/// let spans = scan("xaybzc", &pattern);
/// assert_eq!(
///     spans,
///     vec![MatchedSpan::new(0, 1), MatchedSpan::new(2, 1), MatchedSpan::new(4, 1)]
/// );
/// ```
pub fn scan(text: &str, pattern: &Pattern) -> Vec<MatchedSpan> {
    if pattern.is_empty() || text.is_empty() {
        return Vec::new();
    }

    let folded = fold_chars(text);
    scan_folded(&folded, pattern)
}

/// Scan text that has already been case folded with [`crate::utils::fold_chars`].
pub(crate) fn scan_folded(folded: &[char], pattern: &Pattern) -> Vec<MatchedSpan> {
    let mut spans = Vec::new();
    let mut cursor = 0;

    while cursor < folded.len() {
        let rest = &folded[cursor..];

        if let Some(len) = longest_candidate_at(rest, pattern) {
            spans.push(MatchedSpan::new(cursor, len));
            cursor += len;
            continue;
        }

        if pattern.in_alphabet(rest[0]) {
            spans.push(MatchedSpan::new(cursor, 1));
        }
        cursor += 1;
    }

    check_spans_well_formed(&spans, folded.len());
    spans
}

/// Length of the first candidate that `rest` starts with.
#[inline]
fn longest_candidate_at(rest: &[char], pattern: &Pattern) -> Option<usize> {
    pattern
        .folded_candidates()
        .iter()
        .find(|candidate| rest.starts_with(candidate))
        .map(Vec::len)
}
