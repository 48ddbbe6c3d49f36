// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query execution over an index snapshot.
//!
//! Everything in this module is a pure read of a [`MemoryIndex`]: score
//! every candidate, extract context, merge the note and fact halves, sort,
//! truncate. Holding and swapping snapshots is the
//! [`QueryEngine`](crate::QueryEngine)'s job; these functions can be called
//! against any snapshot from any number of threads.

use std::cmp::Ordering;

use chrono::{Duration, NaiveDate, Utc};

use crate::scoring::relevance;
use crate::snippet::{snippets, SNIPPET_WINDOW};
use crate::tokenize::query_tokens;
use crate::types::{MemoryIndex, Note, NoteSummary, QueryResult, ResultSource};

/// Results returned when the caller does not say how many.
pub const DEFAULT_LIMIT: usize = 10;

/// Snippets kept per result.
pub const MAX_SNIPPETS: usize = 3;

/// Occurrences extracted per query token before snippet dedup.
const MAX_SNIPPETS_PER_TOKEN: usize = 3;

/// Preview length for date-range listings (chars).
const RANGE_PREVIEW_CHARS: usize = 500;

/// Preview length for recency listings (chars).
const RECENT_PREVIEW_CHARS: usize = 300;

/// Knobs for a single `search` call.
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Maximum results returned.
    pub limit: usize,
    /// Whether long-term facts compete alongside notes.
    pub include_facts: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            limit: DEFAULT_LIMIT,
            include_facts: true,
        }
    }
}

/// Ranked keyword search over notes and, optionally, facts.
///
/// Candidates scoring zero are dropped. The rest sort by score descending
/// with ties broken by key descending, so among equally relevant notes the
/// most recent date wins. A query with no extractable tokens returns an
/// empty list.
pub fn search(index: &MemoryIndex, query: &str, opts: &SearchOptions) -> Vec<QueryResult> {
    let tokens = query_tokens(query);
    if tokens.is_empty() {
        return Vec::new();
    }

    let mut results: Vec<QueryResult> = Vec::new();

    for (id, note) in &index.notes {
        let score = relevance(&note.content, query, &tokens);
        if score > 0.0 {
            results.push(QueryResult {
                key: id.clone(),
                score,
                snippets: clipped_snippets(&note.content, &tokens),
                source: ResultSource::Note {
                    word_count: note.word_count,
                },
            });
        }
    }

    if opts.include_facts {
        for (category, fact) in &index.facts {
            let score = relevance(&fact.content, query, &tokens);
            if score > 0.0 {
                results.push(QueryResult {
                    key: category.as_str().to_string(),
                    score,
                    snippets: clipped_snippets(&fact.content, &tokens),
                    source: ResultSource::Fact {
                        date_extracted: fact.date_extracted.clone(),
                    },
                });
            }
        }
    }

    // Stable sort: equal (score, key) pairs keep registry-then-store order,
    // which is itself deterministic.
    results.sort_by(compare_results);
    results.truncate(opts.limit);
    results
}

fn clipped_snippets(text: &str, tokens: &[String]) -> Vec<String> {
    let mut snips = snippets(text, tokens, SNIPPET_WINDOW, MAX_SNIPPETS_PER_TOKEN);
    snips.truncate(MAX_SNIPPETS);
    snips
}

/// Score descending, then key descending so recent dates outrank old ones
/// among ties. Scores are finite sums of finite weights, so the partial
/// comparison never falls through in practice.
fn compare_results(a: &QueryResult, b: &QueryResult) -> Ordering {
    b.score
        .partial_cmp(&a.score)
        .unwrap_or(Ordering::Equal)
        .then_with(|| b.key.cmp(&a.key))
}

/// Notes whose date identifier falls within `[start, end]`, newest first.
///
/// Plain string comparison on the ISO identifiers - valid because they are
/// zero-padded. Identifiers that do not parse as dates never take part; no
/// relevance scoring applies.
pub fn search_by_date_range(index: &MemoryIndex, start: &str, end: &str) -> Vec<NoteSummary> {
    let mut results: Vec<NoteSummary> = index
        .notes
        .values()
        .filter(|note| is_date_id(&note.id))
        .filter(|note| start <= note.id.as_str() && note.id.as_str() <= end)
        .map(|note| summarize(note, RANGE_PREVIEW_CHARS))
        .collect();
    // registry iterates ascending; listings read newest first
    results.reverse();
    results
}

/// Notes from the last `days` days, newest first, capped at `limit`.
pub fn recent(index: &MemoryIndex, days: i64, limit: usize) -> Vec<NoteSummary> {
    let cutoff = (Utc::now().date_naive() - Duration::days(days))
        .format("%Y-%m-%d")
        .to_string();

    let mut results: Vec<NoteSummary> = index
        .notes
        .values()
        .filter(|note| is_date_id(&note.id))
        .filter(|note| note.id.as_str() >= cutoff.as_str())
        .map(|note| summarize(note, RECENT_PREVIEW_CHARS))
        .collect();
    results.reverse();
    results.truncate(limit);
    results
}

fn is_date_id(id: &str) -> bool {
    NaiveDate::parse_from_str(id, "%Y-%m-%d").is_ok()
}

fn summarize(note: &Note, preview_chars: usize) -> NoteSummary {
    NoteSummary {
        id: note.id.clone(),
        word_count: note.word_count,
        preview: note.content.chars().take(preview_chars).collect(),
    }
}
