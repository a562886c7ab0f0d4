// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Checked validation of spans and results.
//!
//! The engine is total and never returns errors, so nothing here runs on the
//! hot path in release builds. These functions exist for callers that build
//! results by hand (custom filters, deserialized results from another
//! process) and want to know the invariants hold before rendering, and for
//! the debug contracts in [`super::contracts`].
//!
//! # Example
//!
//! ```
//! use fuzzmark::{search, validate_result, HighlightTags, SearchOptions, SearchResult};
//!
//! let payload = serde_json::to_string(&search("cat", &["category"], &SearchOptions::default()))?;
//! let results: Vec<SearchResult> = serde_json::from_str(&payload)?;
//! validate_result("category", &results[0], &HighlightTags::default())?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::highlight::{strip_highlight, HighlightTags};
use crate::scoring::{match_percentage, SpanMetrics};
use crate::types::{MatchedSpan, SearchResult};
use std::cmp::Ordering;
use std::fmt;

/// Error type for invariant violations.
#[derive(Debug, Clone, PartialEq)]
pub enum InvariantError {
    /// A span has length zero.
    EmptySpan { position: usize },
    /// A span reaches past the end of the haystack.
    SpanOutOfBounds {
        position: usize,
        end: usize,
        text_len: usize,
    },
    /// A span starts before the previous one ended.
    OverlappingSpans { position: usize },
    /// `haystack_length` does not match the text.
    IncorrectLength { claimed: usize, actual: usize },
    /// A metric disagrees with the value derived from the spans.
    IncorrectMetric {
        metric: &'static str,
        claimed: f64,
        actual: f64,
    },
    /// Stripping the highlight markers does not give back the text.
    HighlightMismatch { stripped: String, text: String },
    /// Results are not in ranking order.
    UnsortedResults { position: usize },
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantError::EmptySpan { position } => {
                write!(f, "span {} has length 0", position)
            }
            InvariantError::SpanOutOfBounds {
                position,
                end,
                text_len,
            } => {
                write!(
                    f,
                    "span {} ends at {} past text length {}",
                    position, end, text_len
                )
            }
            InvariantError::OverlappingSpans { position } => {
                write!(f, "span {} overlaps the span before it", position)
            }
            InvariantError::IncorrectLength { claimed, actual } => {
                write!(f, "haystack_length {} != text length {}", claimed, actual)
            }
            InvariantError::IncorrectMetric {
                metric,
                claimed,
                actual,
            } => {
                write!(f, "{} is {} but spans give {}", metric, claimed, actual)
            }
            InvariantError::HighlightMismatch { stripped, text } => {
                write!(
                    f,
                    "highlight strips to {:?}, expected {:?}",
                    stripped, text
                )
            }
            InvariantError::UnsortedResults { position } => {
                write!(f, "results not in ranking order at position {}", position)
            }
        }
    }
}

impl std::error::Error for InvariantError {}

/// Check that spans are non-empty, in bounds, ordered and non-overlapping.
pub fn validate_spans(spans: &[MatchedSpan], text_len: usize) -> Result<(), InvariantError> {
    let mut previous_end = 0;
    for (position, span) in spans.iter().enumerate() {
        if span.len == 0 {
            return Err(InvariantError::EmptySpan { position });
        }
        let in_bounds = span
            .start
            .checked_add(span.len)
            .is_some_and(|end| end <= text_len);
        if !in_bounds {
            return Err(InvariantError::SpanOutOfBounds {
                position,
                end: span.end(),
                text_len,
            });
        }
        if span.start < previous_end {
            return Err(InvariantError::OverlappingSpans { position });
        }
        previous_end = span.end();
    }
    Ok(())
}

/// Check every invariant of a result against the haystack it came from.
///
/// The highlight round trip is only checked when neither marker occurs in
/// the text itself, since stripping would also eat those occurrences.
pub fn validate_result(
    text: &str,
    result: &SearchResult,
    tags: &HighlightTags,
) -> Result<(), InvariantError> {
    let text_len = text.chars().count();
    if result.haystack_length != text_len {
        return Err(InvariantError::IncorrectLength {
            claimed: result.haystack_length,
            actual: text_len,
        });
    }

    validate_spans(&result.spans, text_len)?;

    let metrics = SpanMetrics::from_spans(&result.spans);
    let checks = [
        ("match_count", result.match_count, metrics.match_count),
        ("longest_chain", result.longest_chain, metrics.longest_chain),
        (
            "longest_chain_index",
            result.longest_chain_index,
            metrics.longest_chain_index,
        ),
    ];
    for (metric, claimed, actual) in checks {
        if claimed != actual {
            return Err(InvariantError::IncorrectMetric {
                metric,
                claimed: claimed as f64,
                actual: actual as f64,
            });
        }
    }

    let percentage = match_percentage(metrics.match_count, text_len);
    if result.match_percentage.total_cmp(&percentage) != Ordering::Equal {
        return Err(InvariantError::IncorrectMetric {
            metric: "match_percentage",
            claimed: result.match_percentage,
            actual: percentage,
        });
    }

    let markers_in_text = [&tags.open, &tags.close]
        .iter()
        .any(|marker| !marker.is_empty() && text.contains(marker.as_str()));
    if !markers_in_text {
        let stripped = strip_highlight(&result.highlight_text, tags);
        if stripped != text {
            return Err(InvariantError::HighlightMismatch {
                stripped,
                text: text.to_string(),
            });
        }
    }

    Ok(())
}

/// Check that results are in the order `compare` puts them.
pub fn validate_sorted<F>(results: &[SearchResult], compare: F) -> Result<(), InvariantError>
where
    F: Fn(&SearchResult, &SearchResult) -> Ordering,
{
    for (position, pair) in results.windows(2).enumerate() {
        if compare(&pair[0], &pair[1]) == Ordering::Greater {
            return Err(InvariantError::UnsortedResults {
                position: position + 1,
            });
        }
    }
    Ok(())
}
