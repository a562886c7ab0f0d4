// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings for select widgets.
//!
//! JS callers hand over whatever they have: arrays with holes, option
//! objects, nulls, or not an array at all. Normalization happens here, with
//! `Reflect` rather than serde, because serde cannot tell a hole from
//! `undefined`.
//!
//! Results come back as plain objects with the snake_case field names of
//! [`SearchResult`].

use crate::pattern::build_pattern;
use crate::search::{search_sparse, substring_search};
use crate::types::{SearchOptions, SearchResult};
use js_sys::{Array, Reflect};
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Collect `(index, text)` pairs from a JS value, skipping holes.
fn js_entries(haystacks: &JsValue) -> Vec<(usize, String)> {
    let Some(array) = haystacks.dyn_ref::<Array>() else {
        return Vec::new();
    };

    let mut entries = Vec::with_capacity(array.length() as usize);
    for i in 0..array.length() {
        // Holes have no own property at their index
        if !Reflect::has(array, &JsValue::from(i)).unwrap_or(false) {
            continue;
        }
        entries.push((i as usize, js_text(&array.get(i))));
    }
    entries
}

/// Text of one haystack: the string itself or an object's string `text`.
fn js_text(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    if value.is_object() {
        return Reflect::get(value, &JsValue::from_str("text"))
            .ok()
            .and_then(|text| text.as_string())
            .unwrap_or_default();
    }
    String::new()
}

fn to_js(results: &[SearchResult]) -> Result<JsValue, JsValue> {
    to_value(results).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Fuzzy search, mirroring the positional JS signature.
///
/// `result_limit` of 0 or `undefined` means unbounded.
#[wasm_bindgen(js_name = search)]
pub fn search_js(
    needle: Option<String>,
    haystacks: JsValue,
    include_non_matches: Option<bool>,
    result_limit: Option<u32>,
) -> Result<JsValue, JsValue> {
    let options = SearchOptions::default()
        .include_non_matches(include_non_matches.unwrap_or(false))
        .limit(result_limit.unwrap_or(0) as usize);
    let needle = needle.unwrap_or_default();
    let entries = js_entries(&haystacks);
    let results = search_sparse(
        &needle,
        entries.iter().map(|(index, text)| (*index, text.as_str())),
        &options,
    );
    to_js(&results)
}

/// Fuzzy search with an options object (`{include_non_matches, limit, highlight}`).
#[wasm_bindgen(js_name = searchWithOptions)]
pub fn search_with_options(
    needle: Option<String>,
    haystacks: JsValue,
    options: JsValue,
) -> Result<JsValue, JsValue> {
    let options: SearchOptions = if options.is_undefined() || options.is_null() {
        SearchOptions::default()
    } else {
        from_value(options).map_err(|e| JsValue::from_str(&e.to_string()))?
    };
    let needle = needle.unwrap_or_default();
    let entries = js_entries(&haystacks);
    let results = search_sparse(
        &needle,
        entries.iter().map(|(index, text)| (*index, text.as_str())),
        &options,
    );
    to_js(&results)
}

/// Case-insensitive containment filter, input order.
#[wasm_bindgen(js_name = substringFilter)]
pub fn substring_filter_js(
    needle: Option<String>,
    haystacks: JsValue,
    include_non_matches: Option<bool>,
) -> Result<JsValue, JsValue> {
    let options =
        SearchOptions::default().include_non_matches(include_non_matches.unwrap_or(false));
    let needle = needle.unwrap_or_default();
    let entries = js_entries(&haystacks);
    let results = substring_search(
        &needle,
        entries.iter().map(|(index, text)| (*index, text.as_str())),
        &options,
    );
    to_js(&results)
}

/// Candidate substrings a needle expands to, longest first.
#[wasm_bindgen(js_name = patternCandidates)]
pub fn pattern_candidates(needle: &str) -> Vec<String> {
    build_pattern(needle).candidate_strings()
}
