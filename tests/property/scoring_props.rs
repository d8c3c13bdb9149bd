//! Scoring properties: range, determinism, self-similarity.

use docrank::scoring::stop_words::is_stop_word;
use docrank::score;
use proptest::prelude::*;

/// Random word-like strings; some collide with stop-words, which is intended.
fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z0-9]{1,6}").unwrap()
}

fn document_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(word_strategy(), 0..12).prop_map(|words| words.join(" "))
}

fn corpus_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(document_strategy(), 0..8)
}

fn has_content(text: &str) -> bool {
    text.split_whitespace().any(|t| !is_stop_word(t))
}

proptest! {
    #[test]
    fn prop_one_score_per_candidate(target in document_strategy(), candidates in corpus_strategy()) {
        prop_assert_eq!(score(&target, candidates.as_slice()).len(), candidates.len());
    }

    #[test]
    fn prop_scores_in_range_and_rounded(target in document_strategy(), candidates in corpus_strategy()) {
        for s in score(&target, candidates.as_slice()) {
            prop_assert!((0.0..=100.0).contains(&s), "score {} out of range", s);
            let cents = s * 100.0;
            prop_assert!((cents - cents.round()).abs() < 1e-6, "score {} not rounded", s);
        }
    }

    #[test]
    fn prop_scoring_is_bit_for_bit_deterministic(
        target in document_strategy(),
        candidates in corpus_strategy(),
    ) {
        let first: Vec<u64> = score(&target, candidates.as_slice()).iter().map(|s| s.to_bits()).collect();
        let second: Vec<u64> = score(&target, candidates.as_slice()).iter().map(|s| s.to_bits()).collect();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_self_similarity_is_100(target in document_strategy(), others in corpus_strategy()) {
        prop_assume!(has_content(&target));
        let mut candidates = others;
        candidates.insert(0, target.clone());
        let scores = score(&target, candidates.as_slice());
        prop_assert!((scores[0] - 100.0).abs() <= 0.01, "self score {}", scores[0]);
    }

    #[test]
    fn prop_disjoint_vocabulary_scores_zero(
        target in prop::collection::vec("[a-m]{3,6}", 1..6),
        candidate in prop::collection::vec("[n-z]{3,6}", 1..6),
    ) {
        let scores = score(&target.join(" "), &[candidate.join(" ")]);
        prop_assert_eq!(scores, vec![0.0]);
    }

    #[test]
    fn prop_stop_word_target_scores_zero(candidates in corpus_strategy()) {
        let scores = score("the a an of with", candidates.as_slice());
        prop_assert!(scores.iter().all(|&s| s == 0.0));
    }
}
