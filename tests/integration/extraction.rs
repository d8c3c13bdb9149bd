//! Files on disk through extraction and ranking.

use crate::common::{assert_ranking_well_formed, identifiers, write_files};
use docrank::{
    extract_files, rank_documents, ExtractionError, ExtractionOutcome, SkillQuery,
};

#[test]
fn test_rank_text_files_from_disk() {
    let (_dir, paths) = write_files(&[
        ("alice.txt", b"Experienced Python and SQL developer"),
        ("bob.txt", b"Java enterprise developer"),
    ]);

    let outcomes = extract_files(&paths);
    let results = rank_documents(
        "Looking for a Python developer with SQL experience",
        &outcomes,
        &SkillQuery::parse("Python, SQL, Java"),
    );

    assert_ranking_well_formed(&results);
    assert_eq!(identifiers(&results), ["alice.txt", "bob.txt"]);
    assert_eq!(results[0].matched_skills, ["Python", "SQL"]);
}

#[test]
fn test_unreadable_files_are_skipped_not_fatal() {
    let (_dir, paths) = write_files(&[
        ("resume.pdf", b"%PDF-1.7 binary"),
        ("good.txt", b"Rust developer"),
        ("notes", b"no extension"),
        ("latin1.txt", &[0x52, 0xe9, 0x73, 0x75, 0x6d, 0xe9]),
        ("empty.txt", b""),
    ]);

    let outcomes = extract_files(&paths);
    assert_eq!(outcomes.len(), 5);
    assert!(matches!(
        &outcomes[0],
        ExtractionOutcome::Failed {
            reason: ExtractionError::Malformed { format, .. },
            ..
        } if format == "pdf"
    ));
    assert_eq!(
        outcomes[2],
        ExtractionOutcome::failed("notes", ExtractionError::MissingExtension)
    );
    assert_eq!(
        outcomes[3],
        ExtractionOutcome::failed("latin1.txt", ExtractionError::InvalidUtf8)
    );

    let results = rank_documents("Rust developer", &outcomes, &SkillQuery::default());
    assert_eq!(identifiers(&results), ["good.txt"]);
}

#[test]
fn test_rank_docx_alongside_text() {
    use docx_rs::{Docx, Paragraph, Run};

    let mut docx = std::io::Cursor::new(Vec::new());
    Docx::new()
        .add_paragraph(Paragraph::new().add_run(Run::new().add_text("Python and SQL developer")))
        .add_paragraph(Paragraph::new().add_run(Run::new().add_text("Ten years of data work")))
        .build()
        .pack(&mut docx)
        .unwrap();
    let docx = docx.into_inner();

    let (_dir, paths) = write_files(&[
        ("alice.docx", docx.as_slice()),
        ("bob.txt", b"Java enterprise developer"),
    ]);

    let outcomes = extract_files(&paths);
    assert_eq!(
        outcomes[0],
        ExtractionOutcome::extracted(
            "alice.docx",
            "Python and SQL developer\nTen years of data work"
        )
    );

    let results = rank_documents(
        "Looking for a Python developer with SQL experience",
        &outcomes,
        &SkillQuery::parse("Python, SQL, Java"),
    );
    assert_ranking_well_formed(&results);
    assert_eq!(identifiers(&results), ["alice.docx", "bob.txt"]);
    assert_eq!(results[0].matched_skills, ["Python", "SQL"]);
}

#[test]
fn test_extraction_preserves_input_order() {
    let files: Vec<(String, Vec<u8>)> = (0..40)
        .map(|i| (format!("doc{:02}.txt", i), format!("document {}", i).into_bytes()))
        .collect();
    let borrowed: Vec<(&str, &[u8])> = files
        .iter()
        .map(|(name, bytes)| (name.as_str(), bytes.as_slice()))
        .collect();
    let (_dir, paths) = write_files(&borrowed);

    let outcomes = extract_files(&paths);
    let ids: Vec<&str> = outcomes.iter().map(ExtractionOutcome::identifier).collect();
    let expected: Vec<&str> = files.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(ids, expected);
}

#[test]
fn test_missing_file_is_an_io_failure() {
    let (dir, _) = write_files(&[]);
    let outcomes = extract_files(&[dir.path().join("gone.txt")]);
    assert!(matches!(
        &outcomes[0],
        ExtractionOutcome::Failed {
            reason: ExtractionError::Io { .. },
            ..
        }
    ));
}
