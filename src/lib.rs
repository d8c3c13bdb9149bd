// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Rank candidate documents against a target description.
//!
//! Give it a target description, a batch of extracted documents and a list of
//! skills. It returns the documents ordered by TF-IDF cosine similarity to the
//! target, each annotated with the skills it mentions.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────┐    ┌──────────────┐    ┌──────────────┐    ┌────────────┐
//! │ extract   │───▶│ utils        │───▶│ scoring      │───▶│ ranking    │
//! │ (files →  │    │ (normalize)  │    │ (TF-IDF,     │    │ (stable    │
//! │  outcomes)│    └──────────────┘    │  cosine)     │    │  sort)     │
//! └───────────┘           │            └──────────────┘    └────────────┘
//!                         ▼                                      ▲
//!                  ┌──────────────┐                              │
//!                  │ skills       │──────────────────────────────┘
//!                  │ (raw text)   │
//!                  └──────────────┘
//! ```
//!
//! `engine` wires these together. `verify` holds the debug contracts and the
//! validators for a finished ranking. `export` turns results into CSV/JSON.
//!
//! # Usage
//!
//! ```
//! use docrank::{rank_documents, ExtractionOutcome, SkillQuery};
//!
//! let documents = vec![
//!     ExtractionOutcome::extracted("alice.txt", "Experienced Python and SQL developer"),
//!     ExtractionOutcome::extracted("bob.txt", "Java enterprise developer"),
//! ];
//! let skills = SkillQuery::parse("Python, SQL, Java");
//!
//! let results = rank_documents(
//!     "Looking for a Python developer with SQL experience",
//!     &documents,
//!     &skills,
//! );
//!
//! assert_eq!(results[0].document_identifier, "alice.txt");
//! assert_eq!(results[0].matched_skills, ["Python", "SQL"]);
//! ```

// Module declarations
pub mod engine;
pub mod export;
pub mod extract;
pub mod scoring;
pub mod skills;
pub mod testing;
mod types;
mod utils;
pub mod verify;

// Re-exports for public API
pub use engine::{admit, admit_all, rank_documents, rank_outcome};
pub use export::{to_csv, to_json};
pub use extract::{extract_file, extract_files, ExtractionError};
pub use scoring::ranking::rank;
pub use scoring::{cosine_similarity, score, TermVector, TfIdfSpace, Vocabulary};
pub use skills::{contains_whole_word, find_skills, SkillQuery};
pub use types::{
    Admission, Document, EmptyCorpusReason, ExclusionReason, ExtractionOutcome, MatchResult,
    RankOptions, RankOutcome, ScoredEntry, TargetDescription, TARGET_IDENTIFIER,
};
pub use utils::{is_normalized, normalize};
pub use verify::{validate_results, InvariantError, ValidatedRanking};
