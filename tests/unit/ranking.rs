//! Ranking: stable descending sort with dense ranks.

use crate::common::{assert_ranking_well_formed, identifiers, make_entry};
use docrank::rank;

#[test]
fn test_tied_scores_keep_input_order() {
    let ranked = rank(vec![make_entry("A", 50.0), make_entry("B", 50.0)]);
    assert_eq!(identifiers(&ranked), ["A", "B"]);
    assert!(ranked[0].rank < ranked[1].rank);
}

#[test]
fn test_all_zero_scores_keep_input_order() {
    let ranked = rank(vec![
        make_entry("c.txt", 0.0),
        make_entry("a.txt", 0.0),
        make_entry("b.txt", 0.0),
    ]);
    assert_eq!(identifiers(&ranked), ["c.txt", "a.txt", "b.txt"]);
    assert_ranking_well_formed(&ranked);
}

#[test]
fn test_ties_get_consecutive_distinct_ranks() {
    let ranked = rank(vec![
        make_entry("a", 90.0),
        make_entry("b", 40.0),
        make_entry("c", 40.0),
        make_entry("d", 10.0),
    ]);
    let ranks: Vec<usize> = ranked.iter().map(|r| r.rank).collect();
    assert_eq!(ranks, [1, 2, 3, 4]);
}

#[test]
fn test_mixed_ties_and_order() {
    let ranked = rank(vec![
        make_entry("x", 12.5),
        make_entry("y", 80.0),
        make_entry("z", 12.5),
        make_entry("w", 80.0),
    ]);
    assert_eq!(identifiers(&ranked), ["y", "w", "x", "z"]);
    assert_ranking_well_formed(&ranked);
}

#[test]
fn test_ranking_same_input_twice() {
    let entries = vec![
        make_entry("a", 33.33),
        make_entry("b", 66.67),
        make_entry("c", 33.33),
    ];
    assert_eq!(rank(entries.clone()), rank(entries));
}
