//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::{ExtractionOutcome, MatchResult, ScoredEntry};

/// Build extracted outcomes from `(identifier, text)` pairs.
pub fn make_outcomes(pairs: &[(&str, &str)]) -> Vec<ExtractionOutcome> {
    pairs
        .iter()
        .map(|&(identifier, text)| ExtractionOutcome::extracted(identifier, text))
        .collect()
}

/// A scored entry with no skills.
pub fn make_entry(identifier: &str, score: f64) -> ScoredEntry {
    ScoredEntry {
        identifier: identifier.to_string(),
        score,
        matched_skills: Vec::new(),
    }
}

/// A match result with no skills.
pub fn make_result(identifier: &str, score: f64, rank: usize) -> MatchResult {
    MatchResult {
        document_identifier: identifier.to_string(),
        score,
        matched_skills: Vec::new(),
        rank,
    }
}

/// Identifiers of a result list, in order.
pub fn identifiers(results: &[MatchResult]) -> Vec<&str> {
    results
        .iter()
        .map(|r| r.document_identifier.as_str())
        .collect()
}

/// The target/candidate corpus used by the end-to-end scenario.
pub fn hiring_scenario() -> (&'static str, Vec<ExtractionOutcome>, Vec<&'static str>) {
    (
        "Looking for a Python developer with SQL experience",
        make_outcomes(&[
            ("alice.txt", "Experienced Python and SQL developer"),
            ("bob.txt", "Java enterprise developer"),
        ]),
        vec!["Python", "SQL", "Java"],
    )
}
