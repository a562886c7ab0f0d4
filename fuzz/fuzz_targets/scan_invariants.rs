// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for scanner and scoring invariants.
//!
//! Any needle against any haystack: spans stay in bounds, ordered and
//! non-overlapping, metrics agree with spans, and stripping the highlight
//! markers gives back the haystack.

#![no_main]

use arbitrary::Arbitrary;
use fuzzmark::{build_pattern, scan, score, validate_result, validate_spans, HighlightTags};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
    needle: String,
    haystack: String,
}

fuzz_target!(|input: Input| {
    // Cap lengths; the scan is quadratic in the needle
    let needle: String = input.needle.chars().take(32).collect();
    let haystack: String = input.haystack.chars().take(512).collect();

    let pattern = build_pattern(&needle);
    let spans = scan(&haystack, &pattern);

    let text_len = haystack.chars().count();
    if let Err(e) = validate_spans(&spans, text_len) {
        panic!("bad spans for {:?} in {:?}: {}", needle, haystack, e);
    }

    // INVARIANT: a short needle only ever produces single-char spans
    if needle.chars().count() < 2 {
        assert!(spans.iter().all(|span| span.len == 1));
    }

    let tags = HighlightTags::default();
    let result = score(0, &haystack, spans, &tags);
    if let Err(e) = validate_result(&haystack, &result, &tags) {
        panic!("bad result for {:?} in {:?}: {}", needle, haystack, e);
    }
});
