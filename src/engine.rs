// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The ranking pipeline: one target, N extraction outcomes, one ranked list.
//!
//! ```text
//! outcomes ──admit──▶ Documents ──normalized──▶ score() ──┐
//!                         │                               ├──▶ rank() ──▶ MatchResults
//!                         └──────raw──────▶ find_skills() ┘
//! ```
//!
//! Everything here is synchronous and self-contained. Each call fits its own
//! vector space; concurrent calls share nothing.

use crate::scoring::{ranking::rank, score};
use crate::skills::{find_skills, SkillQuery};
use crate::types::{
    Admission, Document, EmptyCorpusReason, ExclusionReason, ExtractionOutcome, MatchResult,
    RankOptions, RankOutcome, ScoredEntry, TargetDescription,
};
use crate::verify::contracts::{check_aligned_lengths, check_normalized};

/// Decide whether an extraction outcome joins the corpus.
///
/// Failed extractions and texts that normalize to nothing are excluded. Pure:
/// logging happens in the caller.
pub fn admit(outcome: &ExtractionOutcome) -> Admission {
    match outcome {
        ExtractionOutcome::Failed { identifier, reason } => Admission::Excluded {
            identifier: identifier.clone(),
            reason: ExclusionReason::ExtractionFailed(reason.clone()),
        },
        ExtractionOutcome::Extracted {
            identifier,
            raw_text,
        } => {
            let document = Document::new(identifier.clone(), raw_text.clone());
            if document.is_rankable() {
                Admission::Admitted(document)
            } else {
                Admission::Excluded {
                    identifier: identifier.clone(),
                    reason: ExclusionReason::EmptyText,
                }
            }
        }
    }
}

/// Admit every outcome that can be ranked, in input order.
pub fn admit_all(outcomes: &[ExtractionOutcome]) -> Vec<Document> {
    outcomes
        .iter()
        .filter_map(|outcome| match admit(outcome) {
            Admission::Admitted(document) => Some(document),
            Admission::Excluded { identifier, reason } => {
                match reason {
                    ExclusionReason::ExtractionFailed(e) => {
                        log::warn!("Skipping {}: {}", identifier, e)
                    }
                    ExclusionReason::EmptyText => {
                        log::debug!("Skipping {}: no text after normalization", identifier)
                    }
                }
                None
            }
        })
        .collect()
}

/// Rank `documents` against `target_description`, reporting why when there is
/// nothing to rank.
pub fn rank_outcome(
    target_description: &str,
    documents: &[ExtractionOutcome],
    skill_queries: &SkillQuery,
    options: &RankOptions,
) -> RankOutcome {
    let target = TargetDescription::new(target_description);
    if target.is_empty() {
        log::debug!("target description is empty after normalization");
        return RankOutcome::NothingToRank(EmptyCorpusReason::EmptyTarget);
    }

    let admitted = admit_all(documents);
    if admitted.is_empty() {
        log::debug!("no rankable documents among {} inputs", documents.len());
        return RankOutcome::NothingToRank(EmptyCorpusReason::NoRankableDocuments);
    }

    let candidates: Vec<&str> = admitted.iter().map(Document::normalized_text).collect();
    for text in std::iter::once(target.normalized_text()).chain(candidates.iter().copied()) {
        check_normalized(text);
    }

    let scores = score(target.normalized_text(), candidates.as_slice());
    check_aligned_lengths("scores/documents", scores.len(), admitted.len());

    let entries: Vec<ScoredEntry> = admitted
        .iter()
        .zip(scores)
        .map(|(document, score)| ScoredEntry {
            identifier: document.identifier().to_string(),
            score,
            matched_skills: find_skills(document.raw_text(), skill_queries.terms()),
        })
        .collect();

    let mut results = rank(entries);
    check_aligned_lengths("results/documents", results.len(), admitted.len());

    log::debug!(
        "ranked {} of {} documents; best score {:.2}",
        results.len(),
        documents.len(),
        results.first().map_or(0.0, |r| r.score)
    );

    if let Some(top) = options.top {
        results.truncate(top);
    }

    RankOutcome::Ranked(results)
}

/// Rank `documents` against `target_description`.
///
/// The single entry point for callers that do not care why a ranking is empty.
/// Never fails: an empty target or an empty corpus gives an empty list.
pub fn rank_documents(
    target_description: &str,
    documents: &[ExtractionOutcome],
    skill_queries: &SkillQuery,
) -> Vec<MatchResult> {
    rank_outcome(
        target_description,
        documents,
        skill_queries,
        &RankOptions::default(),
    )
    .into_results()
}
