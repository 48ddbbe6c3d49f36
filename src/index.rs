// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Inverted index construction.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **REGISTRY_COMPLETE**: every posting's `note_id` is a key of `notes`
//! 2. **POSTINGS_SORTED**: each posting list is sorted by `note_id`
//! 3. **COUNT_POSITIVE**: every posting has `count >= 1`
//! 4. **AGGREGATE_EXCLUDED**: the reserved aggregate id is in neither map

use std::collections::{BTreeMap, HashMap};

use chrono::Utc;
use tracing::debug;

use crate::facts::FactStore;
use crate::tokenize::tokenize;
use crate::types::{MemoryIndex, Note, Posting, AGGREGATE_NOTE_ID};

/// Build an immutable index snapshot from materialized inputs.
///
/// Total and deterministic: two builds over identical inputs answer every
/// query identically, and nothing outside the arguments feeds in (the
/// build stamp aside). Reading notes or facts off disk belongs to the
/// scanner and the store loader - this function only computes.
///
/// Duplicate note identifiers keep the last occurrence; the scanner cannot
/// produce duplicates, so this only matters for direct callers.
pub fn build_index(notes: Vec<Note>, facts: FactStore) -> MemoryIndex {
    let mut registry: BTreeMap<String, Note> = BTreeMap::new();
    for note in notes {
        // INVARIANT: AGGREGATE_EXCLUDED
        if note.id == AGGREGATE_NOTE_ID {
            continue;
        }
        registry.insert(note.id.clone(), note);
    }

    // Registry iteration is ordered by id, so posting lists come out sorted
    // without a separate pass (POSTINGS_SORTED).
    let mut terms: HashMap<String, Vec<Posting>> = HashMap::new();
    for (id, note) in &registry {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for token in tokenize(&note.content) {
            *counts.entry(token).or_insert(0) += 1;
        }
        for (term, count) in counts {
            terms.entry(term).or_default().push(Posting {
                note_id: id.clone(),
                count,
            });
        }
    }

    let facts_last_updated = facts.last_updated.clone();
    let facts = facts.into_tagged();

    debug!(
        notes = registry.len(),
        terms = terms.len(),
        facts = facts.len(),
        "built index snapshot"
    );

    MemoryIndex {
        notes: registry,
        terms,
        facts,
        facts_last_updated,
        built_at: Utc::now(),
    }
}
