//! Normalization: the canonical form every score is computed on.

use docrank::{is_normalized, normalize, Document};

#[test]
fn test_mixed_case_and_punctuation() {
    assert_eq!(
        normalize("Looking for a Python developer, with SQL experience!"),
        "looking for a python developer with sql experience"
    );
}

#[test]
fn test_newlines_and_tabs_collapse() {
    assert_eq!(normalize("Python\n\n\tSQL\r\nRust"), "python sql rust");
}

#[test]
fn test_punctuation_only_tokens_vanish_cleanly() {
    // A dash between spaces must not leave a double space behind
    assert_eq!(normalize("Rust -- Go / SQL"), "rust go sql");
    assert!(is_normalized(&normalize("a . b , c")));
}

#[test]
fn test_punctuation_inside_words_joins_them() {
    assert_eq!(normalize("Node.js C++ e-mail"), "nodejs c email");
}

#[test]
fn test_digits_survive() {
    assert_eq!(normalize("Python 3.12, 5+ years"), "python 312 5 years");
}

#[test]
fn test_empty_and_whitespace_only() {
    assert_eq!(normalize(""), "");
    assert_eq!(normalize("   \n\t  "), "");
}

#[test]
fn test_document_caches_normalized_form() {
    let doc = Document::new("cv.txt", "  Senior RUST Engineer  ");
    assert_eq!(doc.normalized_text(), "senior rust engineer");
    assert_eq!(doc.raw_text(), "  Senior RUST Engineer  ");
}
