// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Core data types for document ranking.
//!
//! A ranking request owns everything here. Documents are built once from
//! extracted text, normalized at construction and never mutated after that.
//! Nothing outlives the call that produced it.

use serde::{Deserialize, Serialize};

use crate::extract::ExtractionError;
use crate::utils::normalize;

/// Identifier given to the target description when it is treated as a document.
pub const TARGET_IDENTIFIER: &str = "target";

/// A candidate document: identifier, the text it was extracted with, and the
/// normalized form every score is computed on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    identifier: String,
    raw_text: String,
    normalized_text: String,
}

impl Document {
    pub fn new(identifier: impl Into<String>, raw_text: impl Into<String>) -> Self {
        let raw_text = raw_text.into();
        let normalized_text = normalize(&raw_text);
        Self {
            identifier: identifier.into(),
            raw_text,
            normalized_text,
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Text as extracted. Skill matching runs on this.
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    /// Canonical `[a-z0-9 ]*` form. Scoring runs on this.
    pub fn normalized_text(&self) -> &str {
        &self.normalized_text
    }

    /// A document with nothing left after normalization cannot be scored.
    pub fn is_rankable(&self) -> bool {
        !self.normalized_text.is_empty()
    }
}

/// The description candidates are ranked against. Exactly one per request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetDescription(Document);

impl TargetDescription {
    pub fn new(raw_text: impl Into<String>) -> Self {
        Self(Document::new(TARGET_IDENTIFIER, raw_text))
    }

    pub fn raw_text(&self) -> &str {
        self.0.raw_text()
    }

    pub fn normalized_text(&self) -> &str {
        self.0.normalized_text()
    }

    pub fn is_empty(&self) -> bool {
        !self.0.is_rankable()
    }

    pub fn as_document(&self) -> &Document {
        &self.0
    }
}

/// What the extraction collaborator hands the core for one input.
///
/// Failures are values, not errors: the core decides inclusion by looking at
/// the variant, never by catching anything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum ExtractionOutcome {
    Extracted { identifier: String, raw_text: String },
    Failed {
        identifier: String,
        reason: ExtractionError,
    },
}

impl ExtractionOutcome {
    pub fn extracted(identifier: impl Into<String>, raw_text: impl Into<String>) -> Self {
        ExtractionOutcome::Extracted {
            identifier: identifier.into(),
            raw_text: raw_text.into(),
        }
    }

    pub fn failed(identifier: impl Into<String>, reason: ExtractionError) -> Self {
        ExtractionOutcome::Failed {
            identifier: identifier.into(),
            reason,
        }
    }

    pub fn identifier(&self) -> &str {
        match self {
            ExtractionOutcome::Extracted { identifier, .. }
            | ExtractionOutcome::Failed { identifier, .. } => identifier,
        }
    }
}

impl<I: Into<String>, T: Into<String>> From<(I, T)> for ExtractionOutcome {
    fn from((identifier, raw_text): (I, T)) -> Self {
        ExtractionOutcome::extracted(identifier, raw_text)
    }
}

/// Why an outcome did not make it into the corpus.
#[derive(Debug, Clone, PartialEq)]
pub enum ExclusionReason {
    /// Extraction failed upstream.
    ExtractionFailed(ExtractionError),
    /// Text was extracted but normalizes to nothing.
    EmptyText,
}

/// The inclusion decision for a single extraction outcome.
#[derive(Debug, Clone, PartialEq)]
pub enum Admission {
    Admitted(Document),
    Excluded {
        identifier: String,
        reason: ExclusionReason,
    },
}

/// A candidate after scoring and skill matching, before ranks are assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredEntry {
    pub identifier: String,
    /// Similarity in `[0, 100]`, two decimals.
    pub score: f64,
    pub matched_skills: Vec<String>,
}

/// One ranked candidate, ready for CSV/JSON export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub document_identifier: String,
    /// Similarity in `[0, 100]`, rounded to two decimals.
    pub score: f64,
    /// Requested skills found in the document, in query order, caller's spelling.
    pub matched_skills: Vec<String>,
    /// 1-based, unique, dense.
    pub rank: usize,
}

/// Why a request produced nothing to rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EmptyCorpusReason {
    /// The target description normalizes to an empty string.
    EmptyTarget,
    /// No document survived extraction and normalization.
    NoRankableDocuments,
}

impl std::fmt::Display for EmptyCorpusReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmptyCorpusReason::EmptyTarget => write!(f, "target description has no usable text"),
            EmptyCorpusReason::NoRankableDocuments => {
                write!(f, "no valid text could be extracted from the documents")
            }
        }
    }
}

/// Result of a ranking request for callers that need to tell "nothing to rank"
/// apart from an empty ranking.
#[derive(Debug, Clone, PartialEq)]
pub enum RankOutcome {
    Ranked(Vec<MatchResult>),
    NothingToRank(EmptyCorpusReason),
}

impl RankOutcome {
    /// Collapse to the plain result list; "nothing to rank" becomes empty.
    pub fn into_results(self) -> Vec<MatchResult> {
        match self {
            RankOutcome::Ranked(results) => results,
            RankOutcome::NothingToRank(_) => Vec::new(),
        }
    }

    pub fn results(&self) -> &[MatchResult] {
        match self {
            RankOutcome::Ranked(results) => results,
            RankOutcome::NothingToRank(_) => &[],
        }
    }
}

/// Caller-side knobs. None of them affect scores.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankOptions {
    /// Keep only the best `top` results. Ranks are assigned before truncation.
    pub top: Option<usize>,
}
