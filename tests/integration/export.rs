//! Export of a real ranking to CSV and JSON.

use crate::common::{hiring_scenario, make_outcomes};
use docrank::{rank_documents, to_csv, to_json, MatchResult, SkillQuery};

fn ranked_scenario() -> Vec<MatchResult> {
    let (target, documents, skills) = hiring_scenario();
    rank_documents(target, &documents, &SkillQuery::new(skills))
}

#[test]
fn test_csv_report_for_scenario() {
    let results = ranked_scenario();
    let csv = to_csv(&results).unwrap();
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "Rank,Candidate Name,Match Score (%),Skills Detected");
    assert!(lines[1].starts_with("1,alice.txt,"));
    assert!(lines[1].ends_with(",\"Python, SQL\""));
    assert!(lines[2].starts_with("2,bob.txt,"));
    assert!(lines[2].ends_with(",Java"));
}

#[test]
fn test_csv_score_has_two_decimals() {
    let results = ranked_scenario();
    let csv = to_csv(&results).unwrap();
    let score_cell = csv.lines().nth(1).unwrap().split(',').nth(2).unwrap();
    let (_, decimals) = score_cell.split_once('.').unwrap();
    assert_eq!(decimals.len(), 2);
    assert_eq!(score_cell, format!("{:.2}", results[0].score));
}

#[test]
fn test_csv_no_skills_placeholder() {
    let documents = make_outcomes(&[("plain.txt", "Rust developer")]);
    let results = rank_documents("Rust developer", &documents, &SkillQuery::parse("Haskell"));
    let csv = to_csv(&results).unwrap();
    assert!(csv.lines().nth(1).unwrap().ends_with(",None"));
}

#[test]
fn test_json_round_trips_scenario() {
    let results = ranked_scenario();
    let json = to_json(&results).unwrap();
    assert!(json.contains("\"documentIdentifier\": \"alice.txt\""));
    assert!(json.contains("\"matchedSkills\""));

    let back: Vec<MatchResult> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, results);
}

#[test]
fn test_empty_ranking_exports() {
    assert_eq!(
        to_csv(&[]).unwrap(),
        "Rank,Candidate Name,Match Score (%),Skills Detected\n"
    );
    assert_eq!(to_json(&[]).unwrap(), "[]");
}
