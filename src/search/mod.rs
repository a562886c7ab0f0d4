// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search entry points: where the rubber meets the road.
//!
//! Everything culminates here. Build the pattern once, scan and score every
//! haystack, rank the lot. Two strategies share the scoring and highlighting
//! code: the greedy fuzzy engine (the default) and a plain case-insensitive
//! substring filter. UI layers pick one through the [`Filter`] trait.

mod fuzzy;
pub mod filter;
pub mod substring;

pub use filter::{Filter, FuzzyFilter, SubstringFilter};
pub use fuzzy::*;
pub use substring::substring_search;
