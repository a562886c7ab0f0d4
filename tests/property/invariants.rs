//! Result invariants under random input.

use crate::common::{assert_results_well_formed, keep_all, unmarked};
use fuzzmark::{build_pattern, search, Filter, SearchOptions, SubstringFilter};
use proptest::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Short needles over a small alphabet so they actually hit haystacks.
fn needle_strategy() -> impl Strategy<Value = String> {
    "[a-dA-Dé]{0,6}"
}

/// Haystacks mixing needle chars, other chars, spaces and multi-byte text.
fn haystack_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-fA-F éÉ]{0,16}",
        prop::sample::select(vec![
            "café".to_string(),
            "Ångström".to_string(),
            "日本語".to_string(),
            "bad cab".to_string(),
            String::new(),
        ]),
    ]
}

fn haystacks_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(haystack_strategy(), 0..10)
}

fn as_strs(haystacks: &[String]) -> Vec<&str> {
    haystacks.iter().map(String::as_str).collect()
}

// ============================================================================
// RESULT PROPERTIES
// ============================================================================

proptest! {
    /// Property: every result is consistent with its haystack, the list is
    /// ranked, and stripping markers restores the text.
    #[test]
    fn prop_results_well_formed(needle in needle_strategy(), haystacks in haystacks_strategy()) {
        let texts = as_strs(&haystacks);
        let results = search(&needle, &texts, &keep_all());
        if !needle.is_empty() {
            assert_results_well_formed(&texts, &results);
        }
        for result in &results {
            prop_assert_eq!(unmarked(result), texts[result.index]);
        }
    }

    /// Property: metric bounds hold for every result.
    #[test]
    fn prop_metric_bounds(needle in needle_strategy(), haystacks in haystacks_strategy()) {
        let texts = as_strs(&haystacks);
        for result in search(&needle, &texts, &keep_all()) {
            prop_assert!(result.match_count <= result.haystack_length);
            prop_assert!(result.longest_chain <= result.match_count);
            prop_assert!(result.longest_chain_index <= result.haystack_length);
            prop_assert!(result.longest_chain_index >= result.longest_chain);
            prop_assert!((0.0..=1.0).contains(&result.match_percentage));
            prop_assert_eq!(result.is_match(), !result.spans.is_empty());
        }
    }

    /// Property: the same search twice gives the same answer.
    #[test]
    fn prop_deterministic(needle in needle_strategy(), haystacks in haystacks_strategy()) {
        let texts = as_strs(&haystacks);
        prop_assert_eq!(
            search(&needle, &texts, &keep_all()),
            search(&needle, &texts, &keep_all())
        );
    }

    /// Property: non-matches are dropped unless asked for, and keeping them
    /// returns exactly one result per haystack.
    #[test]
    fn prop_filtering(needle in "[a-d]{1,6}", haystacks in haystacks_strategy()) {
        let texts = as_strs(&haystacks);
        let matched = search(&needle, &texts, &SearchOptions::default());
        prop_assert!(matched.iter().all(|r| r.is_match()));

        let all = search(&needle, &texts, &keep_all());
        prop_assert_eq!(all.len(), texts.len());
        prop_assert_eq!(all.iter().filter(|r| r.is_match()).count(), matched.len());
    }

    /// Property: a limited search is a prefix of the unlimited one.
    #[test]
    fn prop_limit_is_prefix(
        needle in "[a-d]{1,6}",
        haystacks in haystacks_strategy(),
        limit in 1usize..5,
    ) {
        let texts = as_strs(&haystacks);
        let full = search(&needle, &texts, &keep_all());
        let limited = search(&needle, &texts, &keep_all().limit(limit));
        prop_assert_eq!(limited.len(), full.len().min(limit));
        prop_assert_eq!(&limited[..], &full[..limited.len()]);
    }

    /// Property: substring results are a subset of fuzzy matches, in input order.
    #[test]
    fn prop_substring_subset(needle in "[a-d]{1,4}", haystacks in haystacks_strategy()) {
        let texts = as_strs(&haystacks);
        let fuzzy: Vec<usize> = search(&needle, &texts, &SearchOptions::default())
            .iter()
            .map(|r| r.index)
            .collect();
        let substring = SubstringFilter::default().filter_all(&needle, &texts);
        for pair in substring.windows(2) {
            prop_assert!(pair[0].index < pair[1].index);
        }
        for result in &substring {
            prop_assert!(fuzzy.contains(&result.index));
        }
    }
}

// ============================================================================
// PATTERN PROPERTIES
// ============================================================================

proptest! {
    /// Property: candidates are distinct needle substrings of length ≥ 2,
    /// longest first.
    #[test]
    fn prop_candidates_well_formed(needle in "[a-cA-C]{0,8}") {
        let pattern = build_pattern(&needle);
        let candidates = pattern.candidate_strings();
        for (i, candidate) in candidates.iter().enumerate() {
            prop_assert!(candidate.chars().count() >= 2);
            prop_assert!(needle.contains(candidate.as_str()));
            prop_assert!(!candidates[..i].contains(candidate));
        }
        for pair in candidates.windows(2) {
            prop_assert!(pair[0].chars().count() >= pair[1].chars().count());
        }
    }

    /// Property: needles shorter than 2 chars produce only single-char spans.
    #[test]
    fn prop_short_needle_single_char_spans(
        needle in "[a-dé]{0,1}",
        haystacks in haystacks_strategy(),
    ) {
        prop_assert!(build_pattern(&needle).candidates().is_empty());
        let texts = as_strs(&haystacks);
        for result in search(&needle, &texts, &SearchOptions::default()) {
            prop_assert!(result.spans.iter().all(|span| span.len == 1));
            prop_assert!(result.longest_chain <= 1);
        }
    }
}
