// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The long-term fact store.
//!
//! Facts arrive as one JSON document written by the upstream extractor: a
//! top-level `facts` object keyed by category, each category holding
//! already-deduplicated entries, plus a `last_updated` stamp. The category
//! set is closed - an unknown key is a parse error for the whole store,
//! which the engine degrades to "no facts" rather than failing the query
//! path.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// The fixed set of categories the extractor partitions facts into.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum FactCategory {
    Decisions,
    Preferences,
    Goals,
    Constraints,
    Learnings,
    Contacts,
    Projects,
    Habits,
    Other,
}

impl FactCategory {
    /// All categories, in the extractor's canonical order.
    pub const ALL: [FactCategory; 9] = [
        FactCategory::Decisions,
        FactCategory::Preferences,
        FactCategory::Goals,
        FactCategory::Constraints,
        FactCategory::Learnings,
        FactCategory::Contacts,
        FactCategory::Projects,
        FactCategory::Habits,
        FactCategory::Other,
    ];

    /// Lowercase name, matching the JSON key and the serde convention.
    pub fn as_str(self) -> &'static str {
        match self {
            FactCategory::Decisions => "decisions",
            FactCategory::Preferences => "preferences",
            FactCategory::Goals => "goals",
            FactCategory::Constraints => "constraints",
            FactCategory::Learnings => "learnings",
            FactCategory::Contacts => "contacts",
            FactCategory::Projects => "projects",
            FactCategory::Habits => "habits",
            FactCategory::Other => "other",
        }
    }
}

impl fmt::Display for FactCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One extracted fact.
///
/// Only `content` matters to search. The trailing fields are upstream
/// metadata (extraction date, extraction instant, 8-hex-char content
/// digest) that the core carries into results but never interprets; sparse
/// records deserialize with those fields absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fact {
    pub content: String,
    #[serde(default)]
    pub date_extracted: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub hash: Option<String>,
}

/// The fact store document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FactStore {
    #[serde(default)]
    pub facts: BTreeMap<FactCategory, Vec<Fact>>,
    #[serde(default)]
    pub last_updated: Option<String>,
}

impl FactStore {
    /// Total facts across all categories.
    pub fn fact_count(&self) -> usize {
        self.facts.values().map(Vec::len).sum()
    }

    /// Flatten into category-tagged facts: category order, then store order
    /// within a category. This is the shape the index snapshot holds.
    pub fn into_tagged(self) -> Vec<(FactCategory, Fact)> {
        self.facts
            .into_iter()
            .flat_map(|(category, facts)| facts.into_iter().map(move |fact| (category, fact)))
            .collect()
    }
}

/// Why a fact store failed to load.
#[derive(Debug, Error)]
pub enum FactStoreError {
    #[error("failed to read fact store: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed fact store: {0}")]
    Json(#[from] serde_json::Error),
}

/// Load the fact store document at `path`.
///
/// An absent file is a normal state (nothing extracted yet) and loads as an
/// empty store. Unreadable or malformed content is an error; callers on the
/// query path degrade it to an empty store instead of propagating.
pub fn load_fact_store(path: &Path) -> Result<FactStore, FactStoreError> {
    if !path.exists() {
        debug!(path = %path.display(), "fact store absent, loading empty");
        return Ok(FactStore::default());
    }
    let raw = fs::read_to_string(path)?;
    let store: FactStore = serde_json::from_str(&raw)?;
    debug!(facts = store.fact_count(), "loaded fact store");
    Ok(store)
}
