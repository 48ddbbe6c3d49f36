//! Fact store loading against real files.

use std::fs;

use recall::{load_fact_store, FactCategory};
use tempfile::TempDir;

#[test]
fn test_loads_valid_store() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("long_term_memory.json");
    fs::write(
        &path,
        r#"{
            "last_updated": "2026-08-01T09:30:00",
            "facts": {
                "decisions": [
                    {"content": "switching jobs", "date_extracted": "2026-07-30",
                     "timestamp": "2026-07-30T21:00:00", "hash": "deadbeef"}
                ],
                "goals": [
                    {"content": "run a marathon"}
                ]
            }
        }"#,
    )
    .unwrap();

    let store = load_fact_store(&path).unwrap();

    assert_eq!(store.fact_count(), 2);
    assert_eq!(store.facts[&FactCategory::Goals][0].content, "run a marathon");
    assert_eq!(store.last_updated.as_deref(), Some("2026-08-01T09:30:00"));
}

#[test]
fn test_absent_store_loads_empty() {
    let dir = TempDir::new().unwrap();
    let store = load_fact_store(&dir.path().join("long_term_memory.json")).unwrap();
    assert_eq!(store.fact_count(), 0);
}

#[test]
fn test_malformed_store_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("long_term_memory.json");
    fs::write(&path, "{ not json").unwrap();

    assert!(load_fact_store(&path).is_err());
}

#[test]
fn test_unknown_category_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("long_term_memory.json");
    fs::write(&path, r#"{"facts": {"grudges": []}}"#).unwrap();

    assert!(load_fact_store(&path).is_err());
}
