// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how candidates get their numbers.
//!
//! Relevance is TF-IDF cosine similarity against the target description, over
//! a vocabulary built fresh for every request. Ranking is a stable descending
//! sort on that score.

mod core;
pub mod ranking;
pub mod stop_words;

pub use core::*;
