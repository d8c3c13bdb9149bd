//! Ranking and end-to-end invariants.

use crate::common::assert_ranking_well_formed;
use docrank::{rank, rank_documents, ExtractionOutcome, ScoredEntry, SkillQuery};
use proptest::prelude::*;

fn entry_strategy() -> impl Strategy<Value = ScoredEntry> {
    // Few distinct scores so ties are common
    (0u32..5, "[a-z]{1,4}").prop_map(|(bucket, name)| ScoredEntry {
        identifier: name,
        score: f64::from(bucket) * 25.0,
        matched_skills: Vec::new(),
    })
}

fn outcome_strategy() -> impl Strategy<Value = ExtractionOutcome> {
    (
        "[a-z]{1,6}\\.txt",
        prop::string::string_regex("[A-Za-z .,!\n]{0,60}").unwrap(),
    )
        .prop_map(|(id, text)| ExtractionOutcome::extracted(id, text))
}

proptest! {
    #[test]
    fn prop_rank_is_dense_and_sorted(entries in prop::collection::vec(entry_strategy(), 0..20)) {
        let ranked = rank(entries);
        assert_ranking_well_formed(&ranked);
    }

    #[test]
    fn prop_ties_preserve_input_order(entries in prop::collection::vec(entry_strategy(), 0..20)) {
        // Tag each entry with its input position and check positions rise within a score
        let tagged: Vec<ScoredEntry> = entries
            .into_iter()
            .enumerate()
            .map(|(i, mut e)| {
                e.identifier = i.to_string();
                e
            })
            .collect();
        let ranked = rank(tagged);
        for pair in ranked.windows(2) {
            if pair[0].score == pair[1].score {
                let a: usize = pair[0].document_identifier.parse().unwrap();
                let b: usize = pair[1].document_identifier.parse().unwrap();
                prop_assert!(a < b);
            }
        }
    }

    #[test]
    fn prop_result_count_matches_rankable_documents(
        target in "[a-z ]{1,40}",
        outcomes in prop::collection::vec(outcome_strategy(), 0..10),
    ) {
        let results = rank_documents(&target, &outcomes, &SkillQuery::default());
        let rankable = outcomes
            .iter()
            .filter(|o| match o {
                ExtractionOutcome::Extracted { raw_text, .. } => {
                    !docrank::normalize(raw_text).is_empty()
                }
                ExtractionOutcome::Failed { .. } => false,
            })
            .count();
        if docrank::normalize(&target).is_empty() {
            prop_assert!(results.is_empty());
        } else {
            prop_assert_eq!(results.len(), rankable);
        }
        assert_ranking_well_formed(&results);
    }
}
