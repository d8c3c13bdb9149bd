//! Keyword detection properties.

use docrank::find_skills;
use proptest::prelude::*;

fn word() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{2,8}").unwrap()
}

fn query_list() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(word(), 0..6)
}

proptest! {
    #[test]
    fn prop_empty_text_matches_nothing(queries in query_list()) {
        prop_assert!(find_skills("", queries.as_slice()).is_empty());
    }

    #[test]
    fn prop_output_is_subsequence_of_queries(
        words in prop::collection::vec(word(), 0..20),
        queries in query_list(),
    ) {
        let text = words.join(" ");
        let found = find_skills(&text, queries.as_slice());
        let mut remaining = queries.iter();
        for skill in &found {
            prop_assert!(remaining.any(|q| q == skill), "{} out of order", skill);
        }
    }

    #[test]
    fn prop_every_word_in_text_is_found(words in prop::collection::vec(word(), 1..20)) {
        let text = words.join(", ");
        let found = find_skills(&text, words.as_slice());
        prop_assert_eq!(found, words);
    }

    #[test]
    fn prop_embedded_word_not_found(prefix in word(), term in word(), suffix in word()) {
        let text = format!("{}{}{}", prefix, term, suffix);
        prop_assume!(!text.split(|c: char| !c.is_alphanumeric()).any(|w| w == term));
        prop_assert!(find_skills(&text, &[term.as_str()]).is_empty());
    }

    #[test]
    fn prop_case_does_not_matter(term in word()) {
        let text = format!("Expert in {} work", term.to_uppercase());
        prop_assert_eq!(find_skills(&text, &[term.as_str()]), vec![term.clone()]);
    }
}
