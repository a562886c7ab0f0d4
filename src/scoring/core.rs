// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The metrics behind a search result.
//!
//! Everything is derived from the span list of one haystack:
//!
//! ```text
//! match_count         = Σ span.len
//! longest_chain       = max span.len                 (0 without spans)
//! longest_chain_index = end of the FIRST longest span (left to right)
//! match_percentage    = match_count / haystack_length (0 for empty text)
//! ```
//!
//! "First" matters: when two spans tie for longest, the earlier one sets the
//! index, so a haystack that shows the chain sooner ranks higher.

use crate::highlight::{highlight, HighlightTags};
use crate::types::{MatchedSpan, SearchResult};
use crate::verify::contracts::check_result_well_formed;

/// Span-derived numbers, before highlighting.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SpanMetrics {
    pub match_count: usize,
    pub longest_chain: usize,
    pub longest_chain_index: usize,
}

impl SpanMetrics {
    /// Fold a span list into its metrics.
    pub fn from_spans(spans: &[MatchedSpan]) -> Self {
        let mut metrics = SpanMetrics::default();
        for span in spans {
            metrics.match_count += span.len;
            // Strict: a later span of equal length keeps the earlier index
            if span.len > metrics.longest_chain {
                metrics.longest_chain = span.len;
                metrics.longest_chain_index = span.end();
            }
        }
        metrics
    }
}

/// Fraction of the haystack covered by spans, in `[0, 1]`.
#[inline]
pub fn match_percentage(match_count: usize, haystack_length: usize) -> f64 {
    if haystack_length == 0 {
        0.0
    } else {
        match_count as f64 / haystack_length as f64
    }
}

/// Build the full result record for one haystack.
///
/// `spans` must come from scanning `text` (ordered, non-overlapping, in
/// bounds). Checked by contracts in debug builds.
pub fn score(
    index: usize,
    text: &str,
    spans: Vec<MatchedSpan>,
    tags: &HighlightTags,
) -> SearchResult {
    let haystack_length = text.chars().count();
    let metrics = SpanMetrics::from_spans(&spans);

    let result = SearchResult {
        index,
        haystack_length,
        match_percentage: match_percentage(metrics.match_count, haystack_length),
        match_count: metrics.match_count,
        longest_chain: metrics.longest_chain,
        longest_chain_index: metrics.longest_chain_index,
        highlight_text: highlight(text, &spans, tags),
        spans,
    };

    check_result_well_formed(text, &result, tags);
    result
}
