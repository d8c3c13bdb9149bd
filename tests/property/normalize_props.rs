//! Normalization properties.

use docrank::{is_normalized, normalize};
use proptest::prelude::*;

/// Printable ASCII plus whitespace control characters.
fn ascii_text() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ -~\t\n\r]{0,80}").unwrap()
}

proptest! {
    #[test]
    fn prop_normalize_is_idempotent(text in any::<String>()) {
        let once = normalize(&text);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn prop_normalize_is_idempotent_ascii(text in ascii_text()) {
        let once = normalize(&text);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn prop_output_alphabet(text in ascii_text()) {
        let out = normalize(&text);
        prop_assert!(out.bytes().all(|b| b == b' ' || b.is_ascii_lowercase() || b.is_ascii_digit()));
        prop_assert!(!out.contains("  "));
        prop_assert!(!out.starts_with(' '));
        prop_assert!(!out.ends_with(' '));
    }

    #[test]
    fn prop_output_is_normalized(text in any::<String>()) {
        prop_assert!(is_normalized(&normalize(&text)));
    }

    #[test]
    fn prop_alphanumerics_survive(text in ascii_text()) {
        let expected: String = text
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();
        let got: String = normalize(&text).chars().filter(|c| *c != ' ').collect();
        prop_assert_eq!(got, expected);
    }
}
