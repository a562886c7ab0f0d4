//! Shared test utilities and fixtures.

#![allow(dead_code)]

use fuzzmark::verify::validate_sorted;
use fuzzmark::{compare_results, validate_result, HighlightTags, SearchResult};

// Re-export canonical test utilities from fuzzmark::testing
pub use fuzzmark::testing::{indices, keep_all, labels, make_records, unmarked};

// ============================================================================
// FIXTURES
// ============================================================================

/// Option labels of a typical country picker.
pub const COUNTRIES: &[&str] = &[
    "Afghanistan",
    "Albania",
    "Algeria",
    "Andorra",
    "Angola",
    "Argentina",
    "Armenia",
    "Australia",
    "Austria",
    "Azerbaijan",
    "Bahamas",
    "Bangladesh",
    "Belgium",
    "Brazil",
    "Canada",
    "Chile",
    "China",
    "Colombia",
    "Denmark",
    "Germany",
    "New Zealand",
    "Papua New Guinea",
    "United Kingdom",
    "United States",
];

/// Labels with non-ASCII text, where byte and char offsets disagree.
pub const UNICODE_LABELS: &[&str] = &["Ångström", "naïve café", "Straße", "日本語テキスト", "ÉCOLE"];

// ============================================================================
// ASSERTIONS
// ============================================================================

/// Assert every result is internally consistent with its haystack and the
/// list is in ranking order.
pub fn assert_results_well_formed(haystacks: &[&str], results: &[SearchResult]) {
    let tags = HighlightTags::default();
    for result in results {
        let text = haystacks[result.index];
        if let Err(e) = validate_result(text, result, &tags) {
            panic!("result for {:?} is malformed: {}", text, e);
        }
    }
    if let Err(e) = validate_sorted(results, compare_results) {
        panic!("results are not ranked: {}", e);
    }
}

/// Assert results are in input order (no ranking applied).
pub fn assert_input_order(results: &[SearchResult]) {
    for pair in results.windows(2) {
        assert!(
            pair[0].index < pair[1].index,
            "expected input order, got {} before {}",
            pair[0].index,
            pair[1].index
        );
    }
}
