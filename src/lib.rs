// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Greedy fuzzy substring matching, ranking, and highlighting.
//!
//! Given a short needle (whatever the user has typed into a filter box) and a
//! list of haystacks (option labels), find which haystacks resemble the
//! needle, rank them, and wrap the matched fragments in highlight markup.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ pattern.rs  │────▶│   scan.rs    │────▶│ scoring/core │────▶│   scoring/   │
//! │(candidates, │     │ (greedy pass,│     │  (metrics,   │     │   ranking    │
//! │  alphabet)  │     │ MatchedSpan) │     │  highlight)  │     │ (comparator) │
//! └─────────────┘     └──────────────┘     └──────────────┘     └──────────────┘
//!        │                   │                    │                    │
//!        ▼                   ▼                    ▼                    ▼
//! ┌──────────────────────────────────────────────────────────────────────────┐
//! │                               verify/                                     │
//! │         (InvariantError, validate_result, debug-build contracts)          │
//! └──────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `search/` wires the stages together and adds the input normalization
//! (dense slices, sparse entries, untyped JSON) and the [`Filter`] seam.
//!
//! # Usage
//!
//! ```
//! use fuzzmark::{search, SearchOptions};
//!
//! let results = search("xyz", &["xaybzc", "plain"], &SearchOptions::default());
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].match_count, 3);
//! assert_eq!(
//!     results[0].highlight_text,
//!     "<mark>x</mark>a<mark>y</mark>b<mark>z</mark>c"
//! );
//! ```

// Module declarations
pub mod highlight;
mod pattern;
mod scan;
mod scoring;
mod search;
pub mod testing;
mod types;
mod utils;
pub mod verify;

#[cfg(feature = "wasm")]
mod wasm;

// Re-exports for public API
pub use highlight::{strip_highlight, HighlightTags, MARK_CLOSE, MARK_OPEN};
pub use pattern::{build_pattern, Pattern};
pub use scan::scan;
pub use scoring::ranking::{compare_results, rank};
pub use scoring::{match_percentage, score, SpanMetrics};
pub use search::{
    search, search_json, search_sparse, substring_search, Filter, FuzzyFilter, SubstringFilter,
};
pub use types::{AsHaystack, Haystack, HaystackRecord, MatchedSpan, SearchOptions, SearchResult};
pub use utils::fold_char;
pub use verify::{validate_result, validate_spans, InvariantError};
