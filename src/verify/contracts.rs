// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the ranking pipeline.
//!
//! These are debug-mode assertions for programmer errors: mismatched internal
//! array lengths, ranks with gaps, scores outside the scale. They are:
//!
//! 1. **Zero-cost in release builds** (`debug_assert!`)
//! 2. **Early failure detection** while tests run
//!
//! Data-shape problems (empty input, no matches) are never contract failures;
//! the pipeline handles those as ordinary values.
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function          | Property                                   |
//! |----------------------------|--------------------------------------------|
//! | `check_normalized`         | text only contains `[a-z0-9 ]`, single-spaced |
//! | `check_aligned_lengths`    | one score per candidate                    |
//! | `check_score_in_range`     | score is finite and in `[0, 100]`          |
//! | `check_ranks_dense`        | ranks are 1..N, scores non-increasing      |

use crate::scoring::MAX_SCORE;
use crate::types::MatchResult;
use crate::utils::is_normalized;

/// Check that text is in normalized form.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_normalized(text: &str) {
    debug_assert!(
        is_normalized(text),
        "Contract violation: text not normalized: {:?}",
        text.chars().take(40).collect::<String>()
    );
}

/// Check that two parallel arrays line up.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_aligned_lengths(what: &str, left: usize, right: usize) {
    // INVARIANT: one score per candidate, one entry per document
    debug_assert_eq!(
        left, right,
        "Contract violation: {} lengths differ ({} vs {})",
        what, left, right
    );
}

/// Check that a score is on the reported scale.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_score_in_range(score: f64) {
    // INVARIANT: 0 <= score <= 100
    debug_assert!(
        score.is_finite() && (0.0..=MAX_SCORE).contains(&score),
        "Contract violation: score {} outside [0, {}]",
        score,
        MAX_SCORE
    );
}

/// Check that ranks are 1..N in order and scores never increase.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_ranks_dense(results: &[MatchResult]) {
    for (position, result) in results.iter().enumerate() {
        // INVARIANT: dense ranks, no gaps, no repeats
        debug_assert_eq!(
            result.rank,
            position + 1,
            "Contract violation: rank {} at position {}",
            result.rank,
            position
        );
        if position > 0 {
            // INVARIANT: sorted by score descending
            debug_assert!(
                results[position - 1].score >= result.score,
                "Contract violation: score {} at position {} exceeds previous {}",
                result.score,
                position,
                results[position - 1].score
            );
        }
    }
}
