// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: checked validators and runtime contracts.
//!
//! Two complementary approaches to catching bugs:
//!
//! 1. **Checked validators** (`validate_spans`, `validate_result`) that return
//!    an `InvariantError` describing exactly what is wrong. Use them on results
//!    that did not come straight out of the engine.
//!
//! 2. **Runtime contracts** that panic in debug builds when invariants are
//!    violated. Zero-cost in release, but catch bugs during development.

mod types;
pub mod contracts;

pub use types::*;
