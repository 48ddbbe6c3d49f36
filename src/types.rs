// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a memory index.
//!
//! These types define how notes, postings, and query results fit together.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **MemoryIndex**: every posting's `note_id` is a key of `notes`, and the
//!   reserved aggregate id never appears in either. Built once, read
//!   forever - a rebuild produces a fresh value and swaps the shared
//!   reference, it never mutates a live snapshot.
//!
//! - **Posting**: `count >= 1`. A note that does not contain a term has no
//!   posting for it.
//!
//! - **QueryResult**: `score > 0.0`. Zero-score candidates are dropped
//!   before results are assembled, so an empty result list is the only way
//!   to say "nothing matched".

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::facts::{Fact, FactCategory};

/// Reserved identifier of the rolling aggregate note (`MEMORY.md`).
///
/// The scanner reads past it and the builder refuses it; the aggregate is
/// maintained by the compression pipeline, not searched per date.
pub const AGGREGATE_NOTE_ID: &str = "MEMORY";

// =============================================================================
// SOURCE RECORDS
// =============================================================================

/// A dated narrative note, as materialized by the scanner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// ISO date stem for daily notes (`2026-08-07`), or a plain name.
    pub id: String,
    /// Raw markdown content.
    pub content: String,
    /// Whitespace-separated word total of the raw content.
    pub word_count: usize,
}

impl Note {
    /// Build a note from an identifier and raw content, deriving the word
    /// count.
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        let id = id.into();
        let content = content.into();
        let word_count = content.split_whitespace().count();
        Note {
            id,
            content,
            word_count,
        }
    }
}

// =============================================================================
// INDEX STRUCTURE
// =============================================================================

/// One term occurrence record: which note, how many times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Posting {
    pub note_id: String,
    pub count: usize,
}

/// An immutable, fully built search snapshot.
///
/// Two-part structure: the note registry and the inverted term map, plus
/// the flattened fact list riding along so one snapshot answers both halves
/// of a query. Concurrent readers share a snapshot through an `Arc`; see
/// [`QueryEngine`](crate::QueryEngine) for the swap discipline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryIndex {
    /// Note registry keyed by identifier. A `BTreeMap` so iteration is
    /// already in ascending date order.
    pub notes: BTreeMap<String, Note>,
    /// Inverted map: term -> one posting per note containing it.
    pub terms: HashMap<String, Vec<Posting>>,
    /// Category-tagged facts, flattened out of the fact store.
    pub facts: Vec<(FactCategory, Fact)>,
    /// `last_updated` stamp carried over from the fact store, if present.
    pub facts_last_updated: Option<String>,
    /// When this snapshot was built.
    pub built_at: DateTime<Utc>,
}

impl MemoryIndex {
    /// A valid zero-record snapshot.
    ///
    /// This is what queries see when the corpus directory is absent or the
    /// fact store failed to load - degraded availability, never an error.
    pub fn empty() -> Self {
        MemoryIndex {
            notes: BTreeMap::new(),
            terms: HashMap::new(),
            facts: Vec::new(),
            facts_last_updated: None,
            built_at: Utc::now(),
        }
    }

    /// Pure read of snapshot metadata.
    pub fn stats(&self) -> IndexStats {
        IndexStats {
            note_count: self.notes.len(),
            term_count: self.terms.len(),
            fact_count: self.facts.len(),
            built_at: self.built_at,
            facts_last_updated: self.facts_last_updated.clone(),
        }
    }
}

/// Snapshot metadata, as reported by `stats()`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndexStats {
    pub note_count: usize,
    pub term_count: usize,
    pub fact_count: usize,
    pub built_at: DateTime<Utc>,
    pub facts_last_updated: Option<String>,
}

// =============================================================================
// QUERY RESULTS
// =============================================================================

/// Which kind of record produced a result, carrying its per-kind metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum ResultSource {
    /// A dated note; the result key is the note identifier.
    Note { word_count: usize },
    /// A long-term fact; the result key is the category name.
    Fact { date_extracted: Option<String> },
}

/// One ranked hit.
///
/// Scores are comparable within a single query's result list only - there
/// is no normalization across queries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryResult {
    /// Note identifier or fact category name.
    pub key: String,
    pub score: f64,
    /// Context windows around matched tokens, at most three.
    pub snippets: Vec<String>,
    #[serde(flatten)]
    pub source: ResultSource,
}

/// A note listing entry for date-range and recency queries.
///
/// These listings skip relevance scoring entirely; the preview is a plain
/// leading slice of the content, cut on a char boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteSummary {
    pub id: String,
    pub word_count: usize,
    pub preview: String,
}
