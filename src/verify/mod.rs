// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: type-level invariants and runtime contracts.
//!
//! Two complementary approaches to catching bugs:
//!
//! 1. **Type-level wrappers** (`ValidatedScore`, `ValidatedRanking`) and the
//!    `validate_*` functions that callers and tests use to check a ranking.
//!
//! 2. **Runtime contracts** that panic in debug builds when the pipeline breaks
//!    its own invariants. Zero-cost in release, but catch bugs during development.

pub mod contracts;
mod types;

pub use types::*;
