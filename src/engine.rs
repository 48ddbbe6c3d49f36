// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The process-wide index holder.
//!
//! One writer, many readers. The current snapshot lives behind an `Arc`
//! that [`QueryEngine::rebuild`] swaps atomically: the replacement index is
//! constructed fully off to the side, then the reference flips. Queries
//! clone the `Arc` at call start and keep answering from the snapshot they
//! started with, so a rebuild is never observable mid-flight and a live
//! index is never mutated.

use std::path::PathBuf;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::warn;

use crate::corpus::scan_notes;
use crate::facts::{load_fact_store, FactStore};
use crate::index::build_index;
use crate::search;
use crate::types::{IndexStats, MemoryIndex, Note, NoteSummary, QueryResult};

/// Where an engine reads its records from on (re)build.
struct Sources {
    corpus_dir: PathBuf,
    fact_store: PathBuf,
}

/// Query front door: holds the current snapshot and answers all four query
/// contracts against it.
pub struct QueryEngine {
    sources: Option<Sources>,
    current: RwLock<Arc<MemoryIndex>>,
}

impl QueryEngine {
    /// Open an engine over a corpus directory and a fact store file, and
    /// build the initial snapshot.
    ///
    /// Never fails: an absent corpus directory or a broken fact store
    /// degrades to an empty snapshot (logged), and queries answer from
    /// that.
    pub fn open(corpus_dir: impl Into<PathBuf>, fact_store: impl Into<PathBuf>) -> Self {
        let engine = QueryEngine {
            sources: Some(Sources {
                corpus_dir: corpus_dir.into(),
                fact_store: fact_store.into(),
            }),
            current: RwLock::new(Arc::new(MemoryIndex::empty())),
        };
        engine.rebuild();
        engine
    }

    /// Build an engine from already-materialized records.
    ///
    /// For embedders that own acquisition themselves. An engine built this
    /// way has no backing paths; `rebuild` keeps the current snapshot and
    /// [`install`](Self::install) is the way to publish a fresh one.
    pub fn from_records(notes: Vec<Note>, facts: FactStore) -> Self {
        QueryEngine {
            sources: None,
            current: RwLock::new(Arc::new(build_index(notes, facts))),
        }
    }

    /// Rebuild from the configured sources and swap the snapshot in.
    ///
    /// Scan and load failures degrade per half: a failed scan rebuilds
    /// with zero notes, a failed fact store load with zero facts, and
    /// both are logged. In-flight queries keep the snapshot they hold.
    pub fn rebuild(&self) {
        let Some(sources) = &self.sources else {
            return;
        };

        let notes = match scan_notes(&sources.corpus_dir) {
            Ok(notes) => notes,
            Err(err) => {
                warn!(error = %err, "corpus scan failed, rebuilding with no notes");
                Vec::new()
            }
        };
        let facts = match load_fact_store(&sources.fact_store) {
            Ok(store) => store,
            Err(err) => {
                warn!(error = %err, "fact store unavailable, continuing without facts");
                FactStore::default()
            }
        };

        self.install(build_index(notes, facts));
    }

    /// Publish an externally built snapshot, replacing the current one.
    pub fn install(&self, index: MemoryIndex) {
        *self.current.write() = Arc::new(index);
    }

    /// The current snapshot. The caller owns the clone; later rebuilds do
    /// not affect it.
    pub fn snapshot(&self) -> Arc<MemoryIndex> {
        Arc::clone(&self.current.read())
    }

    /// Ranked keyword search against the current snapshot; see
    /// [`search`](fn@crate::search) for the ranking contract.
    pub fn search(&self, query: &str, opts: &search::SearchOptions) -> Vec<QueryResult> {
        search::search(&self.snapshot(), query, opts)
    }

    /// Date-range listing; see [`search_by_date_range`](crate::search_by_date_range).
    pub fn search_by_date_range(&self, start: &str, end: &str) -> Vec<NoteSummary> {
        search::search_by_date_range(&self.snapshot(), start, end)
    }

    /// Recency listing; see [`recent`](crate::recent).
    pub fn recent(&self, days: i64, limit: usize) -> Vec<NoteSummary> {
        search::recent(&self.snapshot(), days, limit)
    }

    /// Snapshot metadata.
    pub fn stats(&self) -> IndexStats {
        self.snapshot().stats()
    }
}
