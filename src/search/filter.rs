// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Pluggable filtering strategies.
//!
//! Select widgets let the host page swap the function that turns filter text
//! into a result list. [`Filter`] is that seam: the fuzzy engine and the
//! substring filter implement it, and so does any closure with the right
//! shape, so hosts can bring their own.

use super::fuzzy::search_sparse;
use super::substring::substring_search;
use crate::types::{AsHaystack, SearchOptions, SearchResult};

/// Turns a needle and indexed haystacks into an ordered result list.
pub trait Filter {
    /// Filter `(index, text)` entries.
    fn filter(&self, needle: &str, entries: &[(usize, &str)]) -> Vec<SearchResult>;

    /// Filter a dense haystack list.
    fn filter_all<H: AsHaystack>(&self, needle: &str, haystacks: &[H]) -> Vec<SearchResult>
    where
        Self: Sized,
    {
        let entries: Vec<(usize, &str)> = haystacks
            .iter()
            .enumerate()
            .map(|(index, haystack)| (index, haystack.haystack_text()))
            .collect();
        self.filter(needle, &entries)
    }
}

/// The greedy fuzzy engine.
#[derive(Debug, Clone, Default)]
pub struct FuzzyFilter {
    pub options: SearchOptions,
}

impl FuzzyFilter {
    pub fn new(options: SearchOptions) -> Self {
        Self { options }
    }
}

impl Filter for FuzzyFilter {
    fn filter(&self, needle: &str, entries: &[(usize, &str)]) -> Vec<SearchResult> {
        search_sparse(needle, entries.iter().copied(), &self.options)
    }
}

/// Case-insensitive literal containment, input order.
#[derive(Debug, Clone, Default)]
pub struct SubstringFilter {
    pub options: SearchOptions,
}

impl SubstringFilter {
    pub fn new(options: SearchOptions) -> Self {
        Self { options }
    }
}

impl Filter for SubstringFilter {
    fn filter(&self, needle: &str, entries: &[(usize, &str)]) -> Vec<SearchResult> {
        substring_search(needle, entries.iter().copied(), &self.options)
    }
}

impl<F> Filter for F
where
    F: Fn(&str, &[(usize, &str)]) -> Vec<SearchResult>,
{
    fn filter(&self, needle: &str, entries: &[(usize, &str)]) -> Vec<SearchResult> {
        self(needle, entries)
    }
}
