// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Literal substring filtering.
//!
//! The strict alternative to the fuzzy engine: a haystack is kept only when
//! it contains the whole needle (ignoring case). Every non-overlapping
//! occurrence is highlighted, scanning left to right, and results stay in
//! input order. Metrics are filled in from the occurrence spans so both
//! strategies hand the UI the same record shape.

use crate::scoring::score;
use crate::types::{MatchedSpan, SearchOptions, SearchResult};
use crate::utils::fold_chars;

/// Filter `(index, text)` entries by case-insensitive containment.
///
/// An empty needle behaves as in the fuzzy search: all entries unmatched
/// and unlimited when `include_non_matches` is set, nothing otherwise.
pub fn substring_search<'a, I>(
    needle: &str,
    entries: I,
    options: &SearchOptions,
) -> Vec<SearchResult>
where
    I: IntoIterator<Item = (usize, &'a str)>,
{
    if needle.is_empty() {
        if !options.include_non_matches {
            return Vec::new();
        }
        return entries
            .into_iter()
            .map(|(index, text)| SearchResult::unmatched(index, text))
            .collect();
    }

    let folded_needle = fold_chars(needle);
    let mut results = Vec::new();
    for (index, text) in entries {
        let spans = occurrences(&fold_chars(text), &folded_needle);
        if spans.is_empty() && !options.include_non_matches {
            continue;
        }
        results.push(score(index, text, spans, &options.highlight));
    }

    if options.limit > 0 {
        results.truncate(options.limit);
    }

    tracing::debug!(returned = results.len(), "substring filter complete");
    results
}

/// Non-overlapping occurrences of `needle` in `text`, left to right.
fn occurrences(text: &[char], needle: &[char]) -> Vec<MatchedSpan> {
    let mut spans = Vec::new();
    let mut cursor = 0;
    while cursor + needle.len() <= text.len() {
        if text[cursor..].starts_with(needle) {
            spans.push(MatchedSpan::new(cursor, needle.len()));
            cursor += needle.len();
        } else {
            cursor += 1;
        }
    }
    spans
}
