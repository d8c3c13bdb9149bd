// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how scored candidates get their rank numbers.
//!
//! Higher score ranks first. Ties keep their input order, which makes the
//! ranking reproducible for the same input set. Ranks are 1..N with no gaps:
//! two tied candidates still get two different, consecutive ranks.

use std::cmp::Ordering;

use crate::types::{MatchResult, ScoredEntry};
use crate::verify::contracts::check_ranks_dense;

/// Compare two scored entries for ranking: descending by score.
///
/// Equal scores compare `Equal`; the caller's stable sort keeps input order.
/// NaN never comes out of the scorer, but it compares equal here rather than
/// panicking.
pub fn compare_entries(a: &ScoredEntry, b: &ScoredEntry) -> Ordering {
    b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal)
}

/// Sort entries by score and assign ranks 1..N.
pub fn rank(mut entries: Vec<ScoredEntry>) -> Vec<MatchResult> {
    // INVARIANT: stable sort, so ties keep input order
    entries.sort_by(compare_entries);

    let results: Vec<MatchResult> = entries
        .into_iter()
        .enumerate()
        .map(|(position, entry)| MatchResult {
            document_identifier: entry.identifier,
            score: entry.score,
            matched_skills: entry.matched_skills,
            rank: position + 1,
        })
        .collect();

    check_ranks_dense(&results);
    results
}
