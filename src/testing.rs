// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::highlight::{strip_highlight, HighlightTags};
use crate::types::{HaystackRecord, SearchOptions, SearchResult};

/// Options that keep every haystack, matched or not.
pub fn keep_all() -> SearchOptions {
    SearchOptions::default().include_non_matches(true)
}

/// Build select-option style records from labels.
pub fn make_records(labels: &[&str]) -> Vec<HaystackRecord> {
    labels.iter().map(|label| HaystackRecord::new(*label)).collect()
}

/// Result indices in output order.
pub fn indices(results: &[SearchResult]) -> Vec<usize> {
    results.iter().map(|r| r.index).collect()
}

/// Map results back to the haystack labels they came from.
pub fn labels<'a>(results: &[SearchResult], haystacks: &[&'a str]) -> Vec<&'a str> {
    results.iter().map(|r| haystacks[r.index]).collect()
}

/// Highlight text with the default `<mark>` markers removed.
pub fn unmarked(result: &SearchResult) -> String {
    strip_highlight(&result.highlight_text, &HighlightTags::default())
}
