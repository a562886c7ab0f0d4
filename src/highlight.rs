// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Highlight markup: wrapping matched spans for display.
//!
//! The output is raw markup. The text between markers is copied verbatim, not
//! escaped, so stripping the markers gives back the original haystack exactly.
//! Callers rendering into HTML own the escaping decision.

use crate::types::MatchedSpan;
use serde::{Deserialize, Serialize};

/// Default opening marker.
pub const MARK_OPEN: &str = "<mark>";

/// Default closing marker.
pub const MARK_CLOSE: &str = "</mark>";

/// Pair of markers wrapped around each matched span.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HighlightTags {
    pub open: String,
    pub close: String,
}

impl Default for HighlightTags {
    fn default() -> Self {
        Self::new(MARK_OPEN, MARK_CLOSE)
    }
}

impl HighlightTags {
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }
}

/// Interleave unmatched runs and wrapped spans.
///
/// `spans` should be ordered and non-overlapping with char offsets inside
/// `text`; spans that are not are skipped. With no spans the text comes back
/// unchanged.
pub fn highlight(text: &str, spans: &[MatchedSpan], tags: &HighlightTags) -> String {
    if spans.is_empty() {
        return text.to_string();
    }

    // Byte offset of every char boundary, plus the end of the string
    let boundaries: Vec<usize> = text
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .collect();

    let mut out =
        String::with_capacity(text.len() + spans.len() * (tags.open.len() + tags.close.len()));
    let mut last = 0;
    for span in spans {
        // Spans out of bounds or behind the previous one are left unmarked
        let (Some(&start), Some(&end)) = (boundaries.get(span.start), boundaries.get(span.end()))
        else {
            continue;
        };
        if start < last {
            continue;
        }
        out.push_str(&text[last..start]);
        out.push_str(&tags.open);
        out.push_str(&text[start..end]);
        out.push_str(&tags.close);
        last = end;
    }
    out.push_str(&text[last..]);
    out
}

/// Remove every marker of `tags` from `highlighted`.
///
/// Inverse of [`highlight`] as long as the markers do not occur in the
/// original text.
pub fn strip_highlight(highlighted: &str, tags: &HighlightTags) -> String {
    let mut out = highlighted.to_string();
    for marker in [&tags.open, &tags.close] {
        if !marker.is_empty() {
            out = out.replace(marker.as_str(), "");
        }
    }
    out
}
