// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Corpus scanning.
//!
//! Notes live as flat markdown files in one directory, one file per day,
//! named by ISO date (`2026-08-07.md`), next to the rolling `MEMORY.md`
//! aggregate. The scanner materializes everything except the aggregate.
//! One unreadable note never fails a scan: it is logged and skipped, and
//! the build carries on with the rest.

use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::{debug, warn};

use crate::types::{Note, AGGREGATE_NOTE_ID};

/// Why a corpus could not be scanned at all.
///
/// Per-file failures are not errors - they are skips. This type only covers
/// the directory listing itself.
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("failed to list corpus directory: {0}")]
    Io(#[from] std::io::Error),
}

/// Scan `dir` for notes.
///
/// Returns every readable `*.md` file except the reserved aggregate, in no
/// guaranteed order - the registry imposes order later. A missing directory
/// is an empty corpus, not an error; only a directory that exists but
/// cannot be listed is one.
pub fn scan_notes(dir: &Path) -> Result<Vec<Note>, CorpusError> {
    if !dir.is_dir() {
        debug!(dir = %dir.display(), "corpus directory missing, scanning nothing");
        return Ok(Vec::new());
    }

    let mut notes = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!(error = %err, "skipping unreadable directory entry");
                continue;
            }
        };
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some("md") {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
            warn!(path = %path.display(), "skipping note with non-UTF-8 name");
            continue;
        };
        if stem == AGGREGATE_NOTE_ID {
            continue;
        }
        match fs::read_to_string(&path) {
            Ok(content) => notes.push(Note::new(stem, content)),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "skipping unreadable note");
            }
        }
    }

    debug!(count = notes.len(), "scanned corpus");
    Ok(notes)
}
