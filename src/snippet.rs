// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Context snippet extraction.
//!
//! For each query token we locate its whole-word occurrences in the text
//! (case-insensitive), cut a window of context around each, and mark the
//! cut edges with an ellipsis. Identical windows collapse to the first
//! occurrence, so a token repeated through one paragraph doesn't flood the
//! result.
//!
//! Matching and slicing happen on the lowercased text, so snippets come
//! back lowercase - consistent with how matches were found, and what the
//! consumer displays today.
//!
//! All positions are char positions, not byte positions: windows must
//! never split a multi-byte character.

/// Characters of context kept on each side of a match.
pub const SNIPPET_WINDOW: usize = 100;

/// Ellipsis marker affixed to every snippet edge.
const ELLIPSIS: &str = "...";

/// Extract context snippets for `tokens` from `text`.
///
/// Occurrences are found per token, in token order, then in text order;
/// at most `max_per_token` occurrences are cut per token before moving on.
/// Each snippet keeps up to `window` chars of context per side and is
/// truncated to `2 * window` chars when the full cut runs longer. An empty
/// token slice yields an empty result - never a panic.
pub fn snippets(
    text: &str,
    tokens: &[String],
    window: usize,
    max_per_token: usize,
) -> Vec<String> {
    if tokens.is_empty() || max_per_token == 0 {
        return Vec::new();
    }

    let lower: Vec<char> = text.to_lowercase().chars().collect();
    let mut out: Vec<String> = Vec::new();

    for token in tokens {
        let pattern: Vec<char> = token.chars().collect();
        if pattern.is_empty() {
            continue;
        }

        let mut found = 0;
        let mut i = 0;
        while found < max_per_token && i + pattern.len() <= lower.len() {
            if lower[i..i + pattern.len()] == pattern[..]
                && is_word_start(&lower, i)
                && is_word_end(&lower, i + pattern.len())
            {
                let snippet = cut_window(&lower, i, i + pattern.len(), window);
                if !out.contains(&snippet) {
                    out.push(snippet);
                }
                found += 1;
                i += pattern.len();
            } else {
                i += 1;
            }
        }
    }

    out
}

/// Cut `window` chars of context either side of `[start, end)`, trim, and
/// affix ellipses.
fn cut_window(chars: &[char], start: usize, end: usize, window: usize) -> String {
    let from = start.saturating_sub(window);
    let to = (end + window).min(chars.len());

    let mut body: String = chars[from..to].iter().collect();
    body = body.trim().to_string();
    if body.chars().count() > window * 2 {
        body = body.chars().take(window * 2).collect();
        body.push_str(ELLIPSIS);
    }

    format!("{ELLIPSIS}{body}{ELLIPSIS}")
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_word_start(chars: &[char], i: usize) -> bool {
    i == 0 || !is_word_char(chars[i - 1])
}

fn is_word_end(chars: &[char], i: usize) -> bool {
    i >= chars.len() || !is_word_char(chars[i])
}
