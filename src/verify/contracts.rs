// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the matching engine.
//!
//! Debug-mode assertions over the invariants in [`crate::types`]. These
//! contracts:
//!
//! 1. Are **zero-cost in release builds** (the bodies are `cfg(debug_assertions)`)
//! 2. Provide **early failure detection** during development
//! 3. Reuse the checked validators in [`super::types`], so there is one
//!    definition of each invariant
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function            | Invariant                                    |
//! |------------------------------|----------------------------------------------|
//! | `check_pattern_ordered`      | candidates sorted by non-increasing length   |
//! | `check_spans_well_formed`    | spans ordered, non-overlapping, in bounds    |
//! | `check_result_well_formed`   | metrics agree with spans, highlight round trip |
//! | `check_results_ranked`       | output sorted by the ranking comparator      |

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

/// The default markers must be non-empty, or stripping them cannot undo a
/// highlight.
const _: () = {
    use crate::highlight::{MARK_CLOSE, MARK_OPEN};
    assert!(!MARK_OPEN.is_empty());
    assert!(!MARK_CLOSE.is_empty());
};

use crate::highlight::HighlightTags;
use crate::pattern::Pattern;
use crate::types::{MatchedSpan, SearchResult};

// ============================================================================
// PATTERN CONTRACTS
// ============================================================================

/// Check that candidates are sorted longest first and at least 2 chars long.
///
/// # Panics (debug builds only)
/// Panics if a candidate is longer than the one before it.
#[inline]
pub fn check_pattern_ordered(pattern: &Pattern) {
    #[cfg(debug_assertions)]
    {
        let candidates = pattern.candidates();
        for (i, candidate) in candidates.iter().enumerate() {
            debug_assert!(
                candidate.len() >= 2,
                "Contract violation: candidate {} has length {} < 2",
                i,
                candidate.len()
            );
        }
        for i in 1..candidates.len() {
            debug_assert!(
                candidates[i - 1].len() >= candidates[i].len(),
                "Contract violation: candidate {} (len {}) longer than candidate {} (len {})",
                i,
                candidates[i].len(),
                i - 1,
                candidates[i - 1].len()
            );
        }
    }
    #[cfg(not(debug_assertions))]
    let _ = pattern;
}

// ============================================================================
// SPAN CONTRACTS
// ============================================================================

/// Check that spans are ordered, non-overlapping and inside the text.
///
/// # Panics (debug builds only)
/// Panics with the violated invariant.
#[inline]
pub fn check_spans_well_formed(spans: &[MatchedSpan], text_len: usize) {
    #[cfg(debug_assertions)]
    if let Err(e) = super::types::validate_spans(spans, text_len) {
        panic!("Contract violation: {}", e);
    }
    #[cfg(not(debug_assertions))]
    let _ = (spans, text_len);
}

// ============================================================================
// RESULT CONTRACTS
// ============================================================================

/// Check that a scored result is consistent with its haystack.
///
/// # Panics (debug builds only)
/// Panics with the violated invariant.
#[inline]
pub fn check_result_well_formed(text: &str, result: &SearchResult, tags: &HighlightTags) {
    #[cfg(debug_assertions)]
    if let Err(e) = super::types::validate_result(text, result, tags) {
        panic!("Contract violation: result {}: {}", result.index, e);
    }
    #[cfg(not(debug_assertions))]
    let _ = (text, result, tags);
}

/// Check that ranked output is in comparator order.
///
/// # Panics (debug builds only)
/// Panics at the first out-of-order pair.
#[inline]
pub fn check_results_ranked(results: &[SearchResult]) {
    #[cfg(debug_assertions)]
    if let Err(e) =
        super::types::validate_sorted(results, crate::scoring::ranking::compare_results)
    {
        panic!("Contract violation: {}", e);
    }
    #[cfg(not(debug_assertions))]
    let _ = results;
}
