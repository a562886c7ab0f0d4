// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for lenient JSON haystack normalization.
//!
//! Whatever JSON arrives, the search must not panic, and every reported
//! index must point into the array.

#![no_main]

use fuzzmark::{search_json, SearchOptions};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(value) = serde_json::from_slice::<serde_json::Value>(data) else {
        return;
    };

    let options = SearchOptions::default().include_non_matches(true);
    let results = search_json("ab", &value, &options);

    let len = value.as_array().map_or(0, Vec::len);
    assert_eq!(results.len(), len);
    assert!(results.iter().all(|r| r.index < len));
});
