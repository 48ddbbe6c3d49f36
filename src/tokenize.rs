// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tokenization shared by the index builder and the relevance scorer.
//!
//! One rule, applied everywhere: maximal runs of ASCII letters, at least
//! three characters long, folded to lowercase. Digits, punctuation, and
//! short runs contribute nothing - not to postings, not to scoring, not to
//! snippet matching. Keeping builder and scorer on the same rule is what
//! makes note scores and fact scores comparable in one result list.

/// Minimum token length. Letter runs shorter than this are discarded.
pub const MIN_TOKEN_LEN: usize = 3;

/// Extract search tokens from `text`.
///
/// Tokens appear in text order and duplicates are kept: the builder counts
/// them per note, the scorer reduces them to a set.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();

    for ch in text.chars() {
        if ch.is_ascii_alphabetic() {
            current.push(ch.to_ascii_lowercase());
        } else if !current.is_empty() {
            if current.len() >= MIN_TOKEN_LEN {
                tokens.push(std::mem::take(&mut current));
            } else {
                current.clear();
            }
        }
    }
    if current.len() >= MIN_TOKEN_LEN {
        tokens.push(current);
    }

    tokens
}

/// Distinct query tokens, first-seen order preserved.
///
/// The scorer weighs each distinct token once, and the snippet extractor
/// walks tokens in discovery order, so dedup must not reorder. Queries are
/// a handful of words; the linear scan is fine.
pub fn query_tokens(query: &str) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for token in tokenize(query) {
        if !seen.contains(&token) {
            seen.push(token);
        }
    }
    seen
}
