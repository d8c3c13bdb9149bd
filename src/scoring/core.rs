// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind relevance scoring.
//!
//! Every request builds its own vector space: the corpus is the target
//! description followed by the candidates, the vocabulary is every distinct
//! non-stop-word token in that corpus, and each corpus member becomes a sparse
//! TF-IDF vector over that vocabulary. A candidate's score is the cosine of the
//! angle between its vector and the target's, scaled to `[0, 100]`.
//!
//! # Weighting
//!
//! ```text
//! tf(t, d)  = number of times t occurs in d
//! idf(t)    = ln((1 + n) / (1 + df(t))) + 1        (smoothed)
//! w(t, d)   = tf(t, d) * idf(t)
//! ```
//!
//! The `+ 1` terms keep a token that appears in every document from being
//! weighted to zero, so a target and candidate sharing only common tokens are
//! still similar.
//!
//! # Invariants
//!
//! - The vocabulary is derived from the current corpus only. It is a plain value
//!   passed from [`TfIdfSpace::fit`] to the scoring step, never cached.
//! - Weights are non-negative, so cosine similarity lands in `[0, 1]`.
//! - Columns are assigned in lexicographic token order and vectors are sorted
//!   by column, so the same corpus always sums in the same order and produces
//!   bit-identical scores.

use std::collections::BTreeMap;

use super::stop_words::is_stop_word;
use crate::verify::contracts::check_score_in_range;

/// Upper bound of the score scale.
pub const MAX_SCORE: f64 = 100.0;

/// Scores are reported with this many decimal places.
pub const SCORE_DECIMALS: i32 = 2;

/// Tokens of a normalized document that can carry weight.
///
/// Normalized text is single-space separated, but empty pieces are skipped
/// anyway so un-normalized input cannot produce an empty token.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace().filter(|token| !is_stop_word(token))
}

/// Token-to-column mapping plus document frequencies for one corpus.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vocabulary {
    columns: BTreeMap<String, usize>,
    doc_freq: Vec<usize>,
    corpus_size: usize,
}

impl Vocabulary {
    /// Collect every distinct non-stop-word token in `corpus`.
    pub fn build<S: AsRef<str>>(corpus: &[S]) -> Self {
        let mut doc_freq_by_term: BTreeMap<String, usize> = BTreeMap::new();

        for text in corpus {
            let mut seen: Vec<&str> = tokenize(text.as_ref()).collect();
            seen.sort_unstable();
            seen.dedup();
            for token in seen {
                *doc_freq_by_term.entry(token.to_string()).or_insert(0) += 1;
            }
        }

        let mut columns = BTreeMap::new();
        let mut doc_freq = Vec::with_capacity(doc_freq_by_term.len());
        for (column, (term, df)) in doc_freq_by_term.into_iter().enumerate() {
            columns.insert(term, column);
            doc_freq.push(df);
        }

        Self {
            columns,
            doc_freq,
            corpus_size: corpus.len(),
        }
    }

    pub fn len(&self) -> usize {
        self.doc_freq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.doc_freq.is_empty()
    }

    pub fn corpus_size(&self) -> usize {
        self.corpus_size
    }

    pub fn column(&self, token: &str) -> Option<usize> {
        self.columns.get(token).copied()
    }

    pub fn doc_freq(&self, column: usize) -> usize {
        self.doc_freq[column]
    }

    /// Smoothed inverse document frequency of a column.
    pub fn idf(&self, column: usize) -> f64 {
        let n = self.corpus_size as f64;
        let df = self.doc_freq[column] as f64;
        ((1.0 + n) / (1.0 + df)).ln() + 1.0
    }

    /// Tokens in column order.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    /// Weight `text` against this vocabulary. Tokens outside it are ignored.
    pub fn vectorize(&self, text: &str) -> TermVector {
        let mut counts: BTreeMap<usize, usize> = BTreeMap::new();
        for token in tokenize(text) {
            if let Some(column) = self.column(token) {
                *counts.entry(column).or_insert(0) += 1;
            }
        }

        let entries = counts
            .into_iter()
            .map(|(column, tf)| (column, tf as f64 * self.idf(column)))
            .collect();

        TermVector { entries }
    }
}

/// Sparse TF-IDF vector: `(column, weight)` pairs sorted by column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermVector {
    entries: Vec<(usize, f64)>,
}

impl TermVector {
    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn weight(&self, column: usize) -> f64 {
        self.entries
            .binary_search_by_key(&column, |&(c, _)| c)
            .map_or(0.0, |i| self.entries[i].1)
    }

    pub fn norm(&self) -> f64 {
        self.entries.iter().map(|&(_, w)| w * w).sum::<f64>().sqrt()
    }

    /// Dot product by merging the two sorted column lists.
    pub fn dot(&self, other: &TermVector) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < self.entries.len() && j < other.entries.len() {
            let (ca, wa) = self.entries[i];
            let (cb, wb) = other.entries[j];
            match ca.cmp(&cb) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += wa * wb;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }
}

/// A fitted vector space: one vocabulary and one vector per corpus member.
#[derive(Debug, Clone, PartialEq)]
pub struct TfIdfSpace {
    vocabulary: Vocabulary,
    vectors: Vec<TermVector>,
}

impl TfIdfSpace {
    /// Build the vocabulary from `corpus` and vectorize every member.
    pub fn fit<S: AsRef<str>>(corpus: &[S]) -> Self {
        let vocabulary = Vocabulary::build(corpus);
        let vectors = corpus
            .iter()
            .map(|text| vocabulary.vectorize(text.as_ref()))
            .collect();
        Self {
            vocabulary,
            vectors,
        }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    pub fn vector(&self, index: usize) -> &TermVector {
        &self.vectors[index]
    }

    pub fn vectors(&self) -> &[TermVector] {
        &self.vectors
    }
}

/// Cosine of the angle between two vectors; 0 when either has zero norm.
pub fn cosine_similarity(a: &TermVector, b: &TermVector) -> f64 {
    let norm_a = a.norm();
    let norm_b = b.norm();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    a.dot(b) / (norm_a * norm_b)
}

/// Round to [`SCORE_DECIMALS`] decimal places.
pub fn round_score(value: f64) -> f64 {
    let factor = 10f64.powi(SCORE_DECIMALS);
    (value * factor).round() / factor
}

/// Map a cosine similarity onto the reported `[0, 100]` scale.
pub fn similarity_to_score(similarity: f64) -> f64 {
    // Float error can push identical vectors a hair past 1.0.
    let score = round_score(similarity.clamp(0.0, 1.0) * MAX_SCORE);
    check_score_in_range(score);
    score
}

/// Score each candidate against the target. Inputs are normalized texts.
///
/// Returns one score per candidate, in input order. No candidates means no
/// scores; an empty vocabulary means every score is 0.
pub fn score<S: AsRef<str>>(target: &str, candidates: &[S]) -> Vec<f64> {
    if candidates.is_empty() {
        return Vec::new();
    }

    let corpus: Vec<&str> = std::iter::once(target)
        .chain(candidates.iter().map(AsRef::as_ref))
        .collect();
    let space = TfIdfSpace::fit(&corpus);

    log::debug!(
        "scoring {} candidates over a vocabulary of {} terms",
        candidates.len(),
        space.vocabulary().len()
    );

    let query = space.vector(0);
    space.vectors()[1..]
        .iter()
        .map(|candidate| similarity_to_score(cosine_similarity(query, candidate)))
        .collect()
}
