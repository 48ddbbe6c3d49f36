// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind result ranking.
//!
//! Four additive signals, summed, unbounded above. Scores are comparable
//! within a single query's result list only - there is no normalization,
//! so never compare scores across queries.
//!
//! # Constants
//!
//! | Signal        | Weight | Trigger                                              |
//! |---------------|--------|------------------------------------------------------|
//! | Exact phrase  | 10.0   | whole query appears verbatim, case-insensitive       |
//! | Token match   | 2.0    | distinct query token present in the text's token set |
//! | Partial match | 0.5    | query/text token pair in a proper substring relation |
//! | Heading match | 3.0    | `#`-prefixed line containing any query token         |
//!
//! The weights are heuristic constants inherited from the memory pipeline.
//! There are no relevance labels to tune against, so they are part of the
//! contract: change them and every ranking test moves.

use std::collections::HashSet;

use crate::tokenize::{query_tokens, tokenize};

/// Flat bonus when the whole query appears as a substring of the text.
pub const EXACT_PHRASE_WEIGHT: f64 = 10.0;

/// Per distinct query token found verbatim in the text's token set.
pub const TOKEN_MATCH_WEIGHT: f64 = 2.0;

/// Per (query token, text token) proper-substring pair. Rewards stems:
/// "decide" still matches a text containing "decided".
pub const PARTIAL_MATCH_WEIGHT: f64 = 0.5;

/// Per heading line containing at least one query token.
pub const HEADING_MATCH_WEIGHT: f64 = 3.0;

/// Score `text` against a raw query string.
///
/// Convenience wrapper for one-off calls; tokenizes the query and defers
/// to [`relevance`].
pub fn score(text: &str, query: &str) -> f64 {
    relevance(text, query, &query_tokens(query))
}

/// Score `text` against a query whose tokens were extracted once up front.
///
/// `tokens` must be [`query_tokens`](crate::tokenize::query_tokens) of the
/// same `query`; the engine tokenizes once per query and reuses the slice
/// across every candidate. A query with zero tokens scores zero, whatever
/// its raw text contains.
pub fn relevance(text: &str, query: &str, tokens: &[String]) -> f64 {
    if tokens.is_empty() {
        return 0.0;
    }

    let text_lower = text.to_lowercase();
    let query_lower = query.to_lowercase();
    let mut total = 0.0;

    // Whole-phrase hit anywhere in the text.
    if !query_lower.is_empty() && text_lower.contains(&query_lower) {
        total += EXACT_PHRASE_WEIGHT;
    }

    let text_tokens: HashSet<String> = tokenize(&text_lower).into_iter().collect();

    for token in tokens {
        if text_tokens.contains(token) {
            total += TOKEN_MATCH_WEIGHT;
        }
        // Proper substrings only - verbatim presence was already paid above.
        for text_token in &text_tokens {
            if token != text_token
                && (text_token.contains(token.as_str()) || token.contains(text_token.as_str()))
            {
                total += PARTIAL_MATCH_WEIGHT;
            }
        }
    }

    for line in text_lower.lines() {
        if !is_heading(line) {
            continue;
        }
        if tokens.iter().any(|token| line.contains(token.as_str())) {
            total += HEADING_MATCH_WEIGHT;
        }
    }

    total
}

/// A heading line starts with one or more `#` followed by a space.
fn is_heading(line: &str) -> bool {
    let hashes = line.bytes().take_while(|byte| *byte == b'#').count();
    hashes > 0 && line.as_bytes().get(hashes) == Some(&b' ')
}
