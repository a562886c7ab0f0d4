// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Utility functions for case-insensitive char handling.

/// Fold a character for case-insensitive comparison.
///
/// Uses the lowercase mapping when it is a single char, otherwise keeps the
/// char as-is. Multi-char expansions (`İ` → `i̇`) would change offsets, and
/// every offset in this crate is a char offset into the original text.
///
/// - 'A' → 'a'
/// - 'É' → 'é'
/// - 'İ' → 'İ'
#[inline]
pub fn fold_char(c: char) -> char {
    if c.is_ascii() {
        return c.to_ascii_lowercase();
    }
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(folded), None) => folded,
        _ => c,
    }
}

/// Fold every char of a string, one output char per input char.
pub fn fold_chars(value: &str) -> Vec<char> {
    value.chars().map(fold_char).collect()
}
