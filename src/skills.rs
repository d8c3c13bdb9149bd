// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Keyword detection: which requested skills appear in a document.
//!
//! Matching runs on the RAW text, lower-cased, not on the normalized form.
//! Normalization strips punctuation, so "C++" and "Node.js" could never be
//! found in normalized text. A hit must sit on word boundaries: the characters
//! immediately around it are non-alphanumeric or the string edge. That keeps
//! "java" from matching inside "javascript".

use serde::{Deserialize, Serialize};

/// Ordered list of requested keywords.
///
/// Entries are trimmed and empty entries dropped at construction. Duplicates
/// are kept; casing is preserved for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillQuery {
    terms: Vec<String>,
}

impl SkillQuery {
    /// Build a query from already-split terms.
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let terms = terms
            .into_iter()
            .map(|t| t.as_ref().trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();
        Self { terms }
    }

    /// Parse the comma-separated form used by request forms ("Python, SQL, Java").
    pub fn parse(input: &str) -> Self {
        Self::new(input.split(','))
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }
}

impl<S: AsRef<str>> FromIterator<S> for SkillQuery {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Return the query terms that occur as whole words in `raw_text`.
///
/// Output order follows `queries`; each term is returned trimmed but otherwise
/// exactly as the caller spelled it. Empty terms are skipped.
pub fn find_skills<S: AsRef<str>>(raw_text: &str, queries: &[S]) -> Vec<String> {
    if raw_text.is_empty() || queries.is_empty() {
        return Vec::new();
    }

    let haystack = raw_text.to_lowercase();

    queries
        .iter()
        .map(|q| q.as_ref().trim())
        .filter(|term| !term.is_empty())
        .filter(|term| contains_whole_word(&haystack, &term.to_lowercase()))
        .map(str::to_string)
        .collect()
}

/// Check for an occurrence of `needle` in `haystack` bounded by
/// non-alphanumeric characters or string edges on both sides.
///
/// Every occurrence is tried, so a bad first hit ("javascript") does not hide
/// a good later one ("java"). Both arguments are expected lower-cased.
pub fn contains_whole_word(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }

    let mut from = 0;
    while let Some(pos) = haystack[from..].find(needle) {
        let start = from + pos;
        let end = start + needle.len();

        let before_ok = haystack[..start]
            .chars()
            .next_back()
            .is_none_or(|c| !c.is_alphanumeric());
        let after_ok = haystack[end..]
            .chars()
            .next()
            .is_none_or(|c| !c.is_alphanumeric());

        if before_ok && after_ok {
            return true;
        }

        // Advance one character, not one needle, so overlapping candidates are seen.
        let step = haystack[start..].chars().next().map_or(1, char::len_utf8);
        from = start + step;
    }

    false
}
