// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Type wrappers that make invalid rankings unrepresentable.
//!
//! A `Vec<MatchResult>` can hold anything: duplicate ranks, scores of 140,
//! results out of order. [`ValidatedRanking`] checks everything once at
//! construction and guarantees it forever after.
//!
//! | Type               | What's Guaranteed                                   |
//! |--------------------|-----------------------------------------------------|
//! | `ValidatedScore`   | finite, in `[0, 100]`, two decimal places           |
//! | `ValidatedRanking` | ranks are 1..N, scores non-increasing, valid scores |
//!
//! # Example
//!
//! ```ignore
//! let ranking = ValidatedRanking::new(results)?;
//! let best = ranking.best(); // ranks are known to be dense
//! ```

use thiserror::Error;

use crate::scoring::{round_score, MAX_SCORE};
use crate::types::MatchResult;
use crate::utils::is_normalized;

/// Error type for invariant violations in a ranking.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvariantError {
    /// Score is NaN, infinite, or outside `[0, 100]`.
    #[error("score {score} at position {position} is outside [0, 100]")]
    ScoreOutOfRange { position: usize, score: f64 },

    /// Score carries more than two decimal places.
    #[error("score {score} at position {position} is not rounded to two decimals")]
    UnroundedScore { position: usize, score: f64 },

    /// Rank at this position is not `position + 1`.
    #[error("rank {rank} at position {position}, expected {}", .position + 1)]
    NonDenseRank { position: usize, rank: usize },

    /// A later result scores higher than an earlier one.
    #[error("score at position {position} is higher than the one before it")]
    UnsortedScores { position: usize },

    /// Result count differs from the number of rankable documents.
    #[error("{results} results for {documents} rankable documents")]
    MismatchedResultCount { results: usize, documents: usize },

    /// A matched skill is empty or padded with whitespace.
    #[error("matched skill {skill:?} at position {position} is not trimmed")]
    UntrimmedSkill { position: usize, skill: String },

    /// Text that should be normalized is not.
    #[error("text {text:?} is not in normalized form")]
    NotNormalized { text: String },
}

/// A score known to be finite, in range and rounded.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ValidatedScore(f64);

impl ValidatedScore {
    pub fn new(score: f64) -> Result<Self, InvariantError> {
        check_score(0, score)?;
        Ok(Self(score))
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

fn check_score(position: usize, score: f64) -> Result<(), InvariantError> {
    if !score.is_finite() || !(0.0..=MAX_SCORE).contains(&score) {
        return Err(InvariantError::ScoreOutOfRange { position, score });
    }
    if (round_score(score) - score).abs() > 1e-9 {
        return Err(InvariantError::UnroundedScore { position, score });
    }
    Ok(())
}

/// Check every MatchResult invariant on a ranked list.
///
/// - scores are finite, in `[0, 100]`, rounded to two decimals
/// - scores never increase down the list
/// - ranks are exactly 1..N in order
/// - matched skills are non-empty and trimmed
pub fn validate_results(results: &[MatchResult]) -> Result<(), InvariantError> {
    for (position, result) in results.iter().enumerate() {
        check_score(position, result.score)?;

        if result.rank != position + 1 {
            return Err(InvariantError::NonDenseRank {
                position,
                rank: result.rank,
            });
        }

        if position > 0 && result.score > results[position - 1].score {
            return Err(InvariantError::UnsortedScores { position });
        }

        if let Some(skill) = result
            .matched_skills
            .iter()
            .find(|s| s.is_empty() || s.trim() != s.as_str())
        {
            return Err(InvariantError::UntrimmedSkill {
                position,
                skill: skill.clone(),
            });
        }
    }
    Ok(())
}

/// Check that a ranking covers every rankable document.
pub fn validate_result_count(
    results: &[MatchResult],
    rankable_documents: usize,
) -> Result<(), InvariantError> {
    if results.len() != rankable_documents {
        return Err(InvariantError::MismatchedResultCount {
            results: results.len(),
            documents: rankable_documents,
        });
    }
    Ok(())
}

/// Check that a string is in the canonical normalized form.
pub fn validate_normalized(text: &str) -> Result<(), InvariantError> {
    if is_normalized(text) {
        Ok(())
    } else {
        Err(InvariantError::NotNormalized {
            text: text.to_string(),
        })
    }
}

/// A ranked result list that passed [`validate_results`].
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRanking {
    results: Vec<MatchResult>,
}

impl ValidatedRanking {
    pub fn new(results: Vec<MatchResult>) -> Result<Self, InvariantError> {
        validate_results(&results)?;
        Ok(Self { results })
    }

    pub fn results(&self) -> &[MatchResult] {
        &self.results
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// The rank-1 result, if any.
    pub fn best(&self) -> Option<&MatchResult> {
        self.results.first()
    }

    /// Look up a result by its rank. Ranks are dense, so this is an index.
    pub fn by_rank(&self, rank: usize) -> Option<&MatchResult> {
        rank.checked_sub(1).and_then(|i| self.results.get(i))
    }

    pub fn into_inner(self) -> Vec<MatchResult> {
        self.results
    }
}
