// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Pattern construction: every contiguous slice of the needle, longest first.
//!
//! A needle of `n` chars expands into at most `n(n-1)/2` candidate substrings
//! of length ≥ 2, plus the set of its individual chars as a fallback. Needles
//! are interactive filter text (a handful of chars), so the quadratic blowup
//! is a non-issue.
//!
//! Order is the whole point. The scanner tries candidates front to back and
//! takes the first hit, so the list must be sorted by non-increasing length,
//! ties broken by the slice's start offset in the needle.

use crate::utils::fold_char;
use std::collections::HashSet;

/// A needle expanded into its matching candidates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pattern {
    /// Multi-char slices of the needle, longest first, deduplicated.
    candidates: Vec<Vec<char>>,
    /// `candidates` case folded, same order.
    folded: Vec<Vec<char>>,
    /// Distinct needle chars, case folded, in order of first appearance.
    alphabet: Vec<char>,
}

impl Pattern {
    /// Candidate substrings in priority order.
    pub fn candidates(&self) -> &[Vec<char>] {
        &self.candidates
    }

    /// Case-folded candidates, aligned with [`Pattern::candidates`].
    pub(crate) fn folded_candidates(&self) -> &[Vec<char>] {
        &self.folded
    }

    /// Candidate substrings as strings, for display.
    pub fn candidate_strings(&self) -> Vec<String> {
        self.candidates.iter().map(|c| c.iter().collect()).collect()
    }

    /// Fallback alphabet (case folded).
    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    /// Is `c` (already folded) in the fallback alphabet?
    #[inline]
    pub fn in_alphabet(&self, folded: char) -> bool {
        self.alphabet.contains(&folded)
    }

    /// True when nothing can ever match (empty needle).
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty() && self.alphabet.is_empty()
    }
}

/// Expand a needle into its candidate list and fallback alphabet.
///
/// Duplicates are dropped by exact (case-sensitive) content, keeping the
/// first occurrence, so `"abab"` yields `abab, aba, bab, ab, ba`.
///
/// # Example
///
/// ```
/// use fuzzmark::build_pattern;
///
/// let pattern = build_pattern("cat");
/// assert_eq!(pattern.candidate_strings(), vec!["cat", "ca", "at"]);
/// assert_eq!(pattern.alphabet(), &['c', 'a', 't']);
/// ```
pub fn build_pattern(needle: &str) -> Pattern {
    let chars: Vec<char> = needle.chars().collect();
    let n = chars.len();

    let mut candidates = Vec::new();
    let mut folded = Vec::new();
    let mut seen: HashSet<&[char]> = HashSet::new();
    for len in (2..=n).rev() {
        for start in 0..=(n - len) {
            let slice = &chars[start..start + len];
            if seen.insert(slice) {
                candidates.push(slice.to_vec());
                folded.push(slice.iter().map(|&c| fold_char(c)).collect());
            }
        }
    }

    let mut alphabet = Vec::new();
    for &c in &chars {
        let lower = fold_char(c);
        if !alphabet.contains(&lower) {
            alphabet.push(lower);
        }
    }

    Pattern {
        candidates,
        folded,
        alphabet,
    }
}
