// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The fuzzy search pipeline.
//!
//! ```text
//! needle ──▶ build_pattern ──┐
//!                            ▼
//! haystack[i] ──▶ scan ──▶ score ──▶ rank ──▶ results
//! ```
//!
//! Three input shapes funnel into the same sparse pipeline:
//!
//! - [`search`]: a dense slice of anything [`AsHaystack`]
//! - [`search_sparse`]: `(index, text)` pairs; missing indices are holes
//! - [`search_json`]: an untyped JSON value, normalized leniently
//!
//! None of them can fail. Garbage in gives an empty or trivial result list.

use crate::pattern::build_pattern;
use crate::scan::scan_folded;
use crate::scoring::ranking::rank;
use crate::scoring::score;
use crate::types::{AsHaystack, SearchOptions, SearchResult};
use crate::utils::fold_chars;
use crate::verify::contracts::{check_pattern_ordered, check_results_ranked};

/// Search a list of haystacks for a needle.
///
/// Returns results ranked best first. With an empty needle there is nothing
/// to rank: every haystack comes back as an unmatched result in input order
/// when `include_non_matches` is set, otherwise the list is empty.
///
/// # Example
///
/// ```
/// use fuzzmark::{search, SearchOptions};
///
/// let results = search("cat", &["category", "concatenate", "dog"], &SearchOptions::default());
/// let order: Vec<usize> = results.iter().map(|r| r.index).collect();
/// assert_eq!(order, vec![0, 1]);
/// assert_eq!(results[0].highlight_text, "<mark>cat</mark>egory");
/// ```
pub fn search<H: AsHaystack>(
    needle: &str,
    haystacks: &[H],
    options: &SearchOptions,
) -> Vec<SearchResult> {
    search_sparse(
        needle,
        haystacks
            .iter()
            .enumerate()
            .map(|(index, haystack)| (index, haystack.haystack_text())),
        options,
    )
}

/// Search `(index, text)` entries.
///
/// Indices are reported back unchanged, so gaps in them (holes of a sparse
/// list) simply never show up in the output.
pub fn search_sparse<'a, I>(needle: &str, entries: I, options: &SearchOptions) -> Vec<SearchResult>
where
    I: IntoIterator<Item = (usize, &'a str)>,
{
    if needle.is_empty() {
        if !options.include_non_matches {
            return Vec::new();
        }
        let results: Vec<SearchResult> = entries
            .into_iter()
            .map(|(index, text)| SearchResult::unmatched(index, text))
            .collect();
        tracing::debug!(haystacks = results.len(), "empty needle, returning haystacks as-is");
        return results;
    }

    let pattern = build_pattern(needle);
    check_pattern_ordered(&pattern);

    let mut results = Vec::new();
    for (index, text) in entries {
        let spans = scan_folded(&fold_chars(text), &pattern);
        if spans.is_empty() && !options.include_non_matches {
            continue;
        }
        let result = score(index, text, spans, &options.highlight);
        tracing::trace!(
            index,
            match_count = result.match_count,
            longest_chain = result.longest_chain,
            "scored haystack"
        );
        results.push(result);
    }

    let scored = results.len();
    let results = rank(results, options);
    check_results_ranked(&results);

    tracing::debug!(
        needle_len = needle.chars().count(),
        candidates = pattern.candidates().len(),
        scored,
        returned = results.len(),
        "fuzzy search complete"
    );
    results
}

/// Search haystacks given as an untyped JSON value.
///
/// A non-array value is an empty list. Strings are text, objects contribute
/// their `text` field when it is a string, and anything else (null, numbers,
/// nested arrays) is searched as empty text.
pub fn search_json(
    needle: &str,
    haystacks: &serde_json::Value,
    options: &SearchOptions,
) -> Vec<SearchResult> {
    let Some(items) = haystacks.as_array() else {
        tracing::debug!("haystacks are not an array, treating as empty");
        return Vec::new();
    };

    search_sparse(
        needle,
        items
            .iter()
            .enumerate()
            .map(|(index, value)| (index, json_text(value))),
        options,
    )
}

/// Text of one JSON haystack, empty when it has none.
pub(crate) fn json_text(value: &serde_json::Value) -> &str {
    match value {
        serde_json::Value::String(text) => text,
        serde_json::Value::Object(map) => map
            .get("text")
            .and_then(serde_json::Value::as_str)
            .unwrap_or(""),
        _ => "",
    }
}
