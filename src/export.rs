// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tabular export of ranked results.
//!
//! CSV columns follow the report format downstream spreadsheets expect:
//! `Rank, Candidate Name, Match Score (%), Skills Detected`, with skills joined
//! by `", "` and `None` when nothing matched.

use crate::types::MatchResult;

pub const CSV_HEADER: [&str; 4] = ["Rank", "Candidate Name", "Match Score (%)", "Skills Detected"];

/// Placeholder written when a candidate matched no skills.
pub const NO_SKILLS: &str = "None";

/// Skills as a single display cell.
pub fn skills_cell(skills: &[String]) -> String {
    if skills.is_empty() {
        NO_SKILLS.to_string()
    } else {
        skills.join(", ")
    }
}

/// Render results as CSV with a header row. Lines end with `\n`; fields are
/// quoted only when they contain a delimiter, quote or line break.
pub fn to_csv(results: &[MatchResult]) -> csv::Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADER)?;
    for result in results {
        writer.write_record([
            result.rank.to_string(),
            result.document_identifier.clone(),
            format!("{:.2}", result.score),
            skills_cell(&result.matched_skills),
        ])?;
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Render results as a pretty-printed JSON array.
pub fn to_json(results: &[MatchResult]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(results)
}
