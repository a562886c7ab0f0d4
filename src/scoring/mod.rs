// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers and their order.
//!
//! There is no single score. Each result carries a handful of metrics (longest
//! chain, where it ends, haystack length, coverage, match count), and the
//! ranker compares them lexicographically. The longest chain dominates
//! everything else: a haystack with a 3-char run beats one with ten scattered
//! 1-char hits.

mod core;
pub mod ranking;

pub use self::core::*;
