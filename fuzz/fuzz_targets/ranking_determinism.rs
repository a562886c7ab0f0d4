// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for ranking order and determinism.
//!
//! The same search run twice must return identical lists, the list must be
//! sorted by the comparator, and a limited search must be a prefix of the
//! unlimited one.

#![no_main]

use arbitrary::Arbitrary;
use fuzzmark::verify::validate_sorted;
use fuzzmark::{compare_results, search, SearchOptions};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
    needle: String,
    haystacks: Vec<String>,
    include_non_matches: bool,
    limit: u8,
}

fuzz_target!(|input: Input| {
    let needle: String = input.needle.chars().take(16).collect();
    let haystacks: Vec<String> = input
        .haystacks
        .into_iter()
        .take(64)
        .map(|h| h.chars().take(128).collect())
        .collect();

    let options = SearchOptions::default().include_non_matches(input.include_non_matches);
    let first = search(&needle, &haystacks, &options);
    let second = search(&needle, &haystacks, &options);

    // INVARIANT 1: Searches are deterministic
    assert_eq!(first, second);

    // INVARIANT 2: Output is ranked (an empty needle returns input order)
    if !needle.is_empty() {
        if let Err(e) = validate_sorted(&first, compare_results) {
            panic!("unranked results for {:?}: {}", needle, e);
        }
    }

    // INVARIANT 3: Non-matches only appear when asked for
    if !input.include_non_matches {
        assert!(first.iter().all(|r| r.is_match()));
    }

    // INVARIANT 4: Limit takes a prefix
    if input.limit > 0 && !needle.is_empty() {
        let limited = search(&needle, &haystacks, &options.clone().limit(input.limit as usize));
        assert_eq!(limited.len(), first.len().min(input.limit as usize));
        assert_eq!(&limited[..], &first[..limited.len()]);
    }
});
