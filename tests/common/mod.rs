//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::collections::BTreeMap;

use recall::{build_index, Fact, FactCategory, FactStore, MemoryIndex, Note};

/// Build an index over in-memory notes, no facts.
pub fn index_of(notes: &[(&str, &str)]) -> MemoryIndex {
    index_with_facts(notes, &[])
}

/// Build an index over in-memory notes plus category-tagged facts.
pub fn index_with_facts(
    notes: &[(&str, &str)],
    facts: &[(FactCategory, &str)],
) -> MemoryIndex {
    let notes = notes
        .iter()
        .map(|(id, content)| Note::new(*id, *content))
        .collect();
    build_index(notes, fact_store(facts))
}

/// A fact store holding the given (category, content) entries.
pub fn fact_store(entries: &[(FactCategory, &str)]) -> FactStore {
    let mut facts: BTreeMap<FactCategory, Vec<Fact>> = BTreeMap::new();
    for (category, content) in entries {
        facts.entry(*category).or_default().push(Fact {
            content: (*content).to_string(),
            date_extracted: Some("2024-01-15".to_string()),
            timestamp: Some("2024-01-15T08:00:00".to_string()),
            hash: Some("0011aabb".to_string()),
        });
    }
    FactStore {
        facts,
        last_updated: Some("2024-01-16T09:00:00".to_string()),
    }
}

/// Identifier strings of a result list, in rank order.
pub fn keys(results: &[recall::QueryResult]) -> Vec<&str> {
    results.iter().map(|result| result.key.as_str()).collect()
}
