//! Two builds over identical inputs answer queries identically.

use recall::{search, FactCategory, SearchOptions};

use super::common::{fact_store, index_with_facts};

const NOTES: &[(&str, &str)] = &[
    ("2024-01-01", "Decided to switch jobs today"),
    ("2024-01-02", "# training\ngym session and meal prep"),
    ("2024-01-03", "long walk, thought about the job offer"),
    ("2024-01-04", "signed the offer. told the team"),
];

const FACTS: &[(FactCategory, &str)] = &[
    (FactCategory::Decisions, "decided to accept the offer"),
    (FactCategory::Habits, "gym three times a week"),
];

#[test]
fn test_rebuild_preserves_search_results() {
    let first = index_with_facts(NOTES, FACTS);
    let second = index_with_facts(NOTES, FACTS);

    for query in ["decided", "gym", "offer team", "job"] {
        let a = search(&first, query, &SearchOptions::default());
        let b = search(&second, query, &SearchOptions::default());
        assert_eq!(a.len(), b.len(), "result count differs for {query:?}");
        for (left, right) in a.iter().zip(&b) {
            assert_eq!(left.key, right.key, "key order differs for {query:?}");
            assert_eq!(left.score, right.score, "score differs for {query:?}");
            assert_eq!(left.snippets, right.snippets, "snippets differ for {query:?}");
        }
    }
}

#[test]
fn test_repeated_queries_against_one_snapshot_agree() {
    let index = index_with_facts(NOTES, FACTS);

    let a = search(&index, "offer", &SearchOptions::default());
    let b = search(&index, "offer", &SearchOptions::default());
    assert_eq!(a, b);
}

#[test]
fn test_fact_store_flattening_is_stable() {
    let store_a = fact_store(FACTS);
    let store_b = fact_store(FACTS);
    assert_eq!(store_a.into_tagged(), store_b.into_tagged());
}
