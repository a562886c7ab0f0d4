// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a search: haystacks, spans, results, options.
//!
//! Haystacks arrive in whatever shape the caller has: plain strings, option
//! records with a `text` field, nulls, or holes in a sparse list. Everything
//! in here exists to flatten that mess into `(index, &str)` pairs before the
//! engine sees it, and to describe what comes back out.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **MatchedSpan**: `start + len ≤ text.chars().count()` and `len ≥ 1`.
//!   Spans of one haystack are strictly ordered and never overlap.
//!
//! - **SearchResult**: `match_count ≤ haystack_length`,
//!   `longest_chain ≤ match_count`, `0.0 ≤ match_percentage ≤ 1.0`.
//!   Stripping the highlight markers from `highlight_text` gives back the
//!   original text.
//!
//! All lengths and offsets count `char`s, not bytes.

use crate::highlight::HighlightTags;
use serde::{Deserialize, Serialize};

// =============================================================================
// HAYSTACK INPUT
// =============================================================================

/// A record-shaped haystack, such as a select option.
///
/// Only `text` is looked at. Other fields are ignored on deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HaystackRecord {
    #[serde(default, deserialize_with = "lenient_text")]
    pub text: Option<String>,
}

impl HaystackRecord {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }
}

/// Accept any JSON value for `text`, keeping it only when it is a string.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(text) => Some(text),
        _ => None,
    })
}

/// One entry of a haystack list, in any of the shapes callers hand us.
///
/// Deserializes from any JSON value: a string is text, an object contributes
/// its `text` field when that is a string, and everything else (null,
/// numbers, arrays, objects without text) is an empty entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged, from = "serde_json::Value")]
pub enum Haystack {
    Text(String),
    Record(HaystackRecord),
    Null,
}

impl From<serde_json::Value> for Haystack {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(text) => Haystack::Text(text),
            serde_json::Value::Object(mut map) => Haystack::Record(HaystackRecord {
                text: match map.remove("text") {
                    Some(serde_json::Value::String(text)) => Some(text),
                    _ => None,
                },
            }),
            _ => Haystack::Null,
        }
    }
}

impl From<&str> for Haystack {
    fn from(text: &str) -> Self {
        Haystack::Text(text.to_string())
    }
}

impl From<String> for Haystack {
    fn from(text: String) -> Self {
        Haystack::Text(text)
    }
}

/// Anything that can be searched as a haystack.
///
/// Missing text (a null entry, a record without `text`) is reported as `""`,
/// never as an error.
pub trait AsHaystack {
    fn haystack_text(&self) -> &str;
}

impl AsHaystack for str {
    fn haystack_text(&self) -> &str {
        self
    }
}

impl AsHaystack for String {
    fn haystack_text(&self) -> &str {
        self
    }
}

impl AsHaystack for HaystackRecord {
    fn haystack_text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }
}

impl AsHaystack for Haystack {
    fn haystack_text(&self) -> &str {
        match self {
            Haystack::Text(text) => text,
            Haystack::Record(record) => record.haystack_text(),
            Haystack::Null => "",
        }
    }
}

impl<T: AsHaystack + ?Sized> AsHaystack for &T {
    fn haystack_text(&self) -> &str {
        (**self).haystack_text()
    }
}

/// `None` is a null entry: it is searched as empty text, not skipped.
impl<T: AsHaystack> AsHaystack for Option<T> {
    fn haystack_text(&self) -> &str {
        self.as_ref().map_or("", AsHaystack::haystack_text)
    }
}

// =============================================================================
// MATCHED SPANS
// =============================================================================

/// A run of haystack text that resembles part of the needle.
///
/// `start` and `len` are char offsets into the haystack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchedSpan {
    pub start: usize,
    pub len: usize,
}

impl MatchedSpan {
    #[inline]
    pub fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// One past the last char of the span, saturating at `usize::MAX`.
    #[inline]
    pub fn end(&self) -> usize {
        self.start.saturating_add(self.len)
    }
}

// =============================================================================
// SEARCH RESULTS
// =============================================================================

/// Per-haystack outcome of a search.
///
/// Field names match what select widgets read (`index` maps back to the
/// original option, `highlight_text` is rendered as markup).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Position of the haystack in the caller's list.
    pub index: usize,
    /// Length of the haystack text in chars.
    pub haystack_length: usize,
    /// `match_count / haystack_length`, 0 for empty haystacks.
    pub match_percentage: f64,
    /// Total chars covered by spans.
    pub match_count: usize,
    /// Length of the longest span.
    pub longest_chain: usize,
    /// End offset of the first span of length `longest_chain`.
    pub longest_chain_index: usize,
    /// Haystack text with every span wrapped in highlight markers.
    pub highlight_text: String,
    /// The spans the highlight was built from, left to right.
    #[serde(default)]
    pub spans: Vec<MatchedSpan>,
}

impl SearchResult {
    /// A result with no matches whose highlight is the text itself.
    pub fn unmatched(index: usize, text: &str) -> Self {
        Self {
            index,
            haystack_length: text.chars().count(),
            match_percentage: 0.0,
            match_count: 0,
            longest_chain: 0,
            longest_chain_index: 0,
            highlight_text: text.to_string(),
            spans: Vec::new(),
        }
    }

    #[inline]
    pub fn is_match(&self) -> bool {
        self.match_count > 0
    }
}

// =============================================================================
// OPTIONS
// =============================================================================

/// Knobs for a single search call.
///
/// Deserializable so UI layers can pass them through as JSON/JS objects;
/// missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Keep haystacks that matched nothing (default: false).
    pub include_non_matches: bool,
    /// Maximum number of results, 0 for unbounded (default: 0).
    pub limit: usize,
    /// Markers wrapped around matched spans (default: `<mark>`).
    pub highlight: HighlightTags,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            include_non_matches: false,
            limit: 0,
            highlight: HighlightTags::default(),
        }
    }
}

impl SearchOptions {
    pub fn include_non_matches(mut self, include: bool) -> Self {
        self.include_non_matches = include;
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn highlight(mut self, highlight: HighlightTags) -> Self {
        self.highlight = highlight;
        self
    }
}
