// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how search results get sorted.
//!
//! Lexicographic over the result metrics, no weighted sum. A longer chain
//! always wins, no matter how the remaining metrics look. Later keys only
//! break ties of earlier ones, and the haystack index at the end makes the
//! order total, so the output never depends on the sort algorithm.

use crate::types::{SearchOptions, SearchResult};
use std::cmp::Ordering;

/// Compare two search results for ranking.
///
/// Sort order:
/// 1. **Longest chain** - longer wins
/// 2. **Chain end** - the chain that ends earlier wins
/// 3. **Haystack length** - shorter haystack wins
/// 4. **Match percentage** - higher coverage wins
/// 5. **Match count** - more matched chars win
/// 6. **Index** - earlier input position wins
///
/// # Example
///
/// ```
/// use fuzzmark::{compare_results, search, SearchOptions};
/// use std::cmp::Ordering;
///
/// let results = search("cat", &["concatenate", "category"], &SearchOptions::default());
/// let concatenate = results.iter().find(|r| r.index == 0).unwrap();
/// let category = results.iter().find(|r| r.index == 1).unwrap();
///
/// // Same chain, but "category" ends it at 3 and "concatenate" at 6
/// assert_eq!(compare_results(category, concatenate), Ordering::Less);
/// ```
pub fn compare_results(a: &SearchResult, b: &SearchResult) -> Ordering {
    b.longest_chain
        .cmp(&a.longest_chain)
        .then_with(|| a.longest_chain_index.cmp(&b.longest_chain_index))
        .then_with(|| a.haystack_length.cmp(&b.haystack_length))
        .then_with(|| b.match_percentage.total_cmp(&a.match_percentage))
        .then_with(|| b.match_count.cmp(&a.match_count))
        .then_with(|| a.index.cmp(&b.index))
}

/// Drop non-matches (unless asked to keep them), sort, and cap.
///
/// Only reorders and filters; the results themselves are untouched.
pub fn rank(mut results: Vec<SearchResult>, options: &SearchOptions) -> Vec<SearchResult> {
    if !options.include_non_matches {
        results.retain(SearchResult::is_match);
    }

    results.sort_by(compare_results);

    if options.limit > 0 {
        results.truncate(options.limit);
    }

    results
}
