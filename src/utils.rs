// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text normalization: the canonical form every comparison runs on.

/// Normalize a string for scoring: lowercase, strip everything outside
/// `[a-z0-9]`, and collapse whitespace.
///
/// - "Senior Python/SQL Developer!" → "senior pythonsql developer"
/// - "  C++\n\tand  Node.js " → "c and nodejs"
/// - "résumé" → "rsum"
///
/// # Algorithm
///
/// 1. Lowercase
/// 2. Every whitespace character becomes a separator, every character that is
///    not an ASCII lowercase letter or digit is dropped
/// 3. Collapse separator runs into a single space and trim
///
/// Dropping characters before collapsing means removed punctuation between two
/// spaces ("a - b") never leaves a double space behind.
///
/// The result only contains `[a-z0-9 ]`, has no leading, trailing or repeated
/// spaces, and `normalize(normalize(x)) == normalize(x)`.
pub fn normalize(value: &str) -> String {
    let filtered: String = value
        .to_lowercase()
        .chars()
        .filter_map(|c| {
            if c.is_whitespace() {
                Some(' ')
            } else if c.is_ascii_lowercase() || c.is_ascii_digit() {
                Some(c)
            } else {
                None
            }
        })
        .collect();

    filtered.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Check that a string is already in normalized form.
pub fn is_normalized(value: &str) -> bool {
    let alphabet_ok = value
        .bytes()
        .all(|b| b == b' ' || b.is_ascii_lowercase() || b.is_ascii_digit());
    alphabet_ok && !value.starts_with(' ') && !value.ends_with(' ') && !value.contains("  ")
}
