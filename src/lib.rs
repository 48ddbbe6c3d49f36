//! Ranked keyword search across dated memory notes and a long-term fact
//! store.
//!
//! The crate indexes a directory of daily notes (`YYYY-MM-DD.md`) plus a
//! category-partitioned fact store, and answers keyword queries with
//! scored results and matched excerpts, date-range filters, and recency
//! listings. Ranking is purely lexical - no embeddings, no external
//! signals, no query history.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  corpus.rs  │────▶│   index.rs   │────▶│  search.rs   │
//! │  facts.rs   │     │ (build_index)│     │ (search,     │
//! │ (scan/load) │     │              │     │  recent, …)  │
//! └─────────────┘     └──────────────┘     └──────────────┘
//!                            │                     ▲
//!                            ▼                     │
//!                     ┌──────────────────────────────────┐
//!                     │            engine.rs             │
//!                     │ (QueryEngine: atomically swapped │
//!                     │     Arc<MemoryIndex> snapshot)   │
//!                     └──────────────────────────────────┘
//! ```
//!
//! Scoring and snippet extraction share one tokenization rule
//! (`tokenize.rs`), so notes and facts compete in a single ranked list.
//!
//! # Usage
//!
//! ```ignore
//! use recall::{QueryEngine, SearchOptions};
//!
//! let engine = QueryEngine::open("workspace/memory", "workspace/long_term_memory.json");
//! let results = engine.search("switch jobs", &SearchOptions::default());
//! for hit in results {
//!     println!("{:.1}  {}", hit.score, hit.key);
//! }
//! ```

// Module declarations
mod corpus;
mod engine;
mod facts;
mod index;
mod scoring;
mod search;
mod snippet;
mod tokenize;
mod types;

// Re-exports for public API
pub use corpus::{scan_notes, CorpusError};
pub use engine::QueryEngine;
pub use facts::{load_fact_store, Fact, FactCategory, FactStore, FactStoreError};
pub use index::build_index;
pub use scoring::{
    relevance, score, EXACT_PHRASE_WEIGHT, HEADING_MATCH_WEIGHT, PARTIAL_MATCH_WEIGHT,
    TOKEN_MATCH_WEIGHT,
};
pub use search::{
    recent, search, search_by_date_range, SearchOptions, DEFAULT_LIMIT, MAX_SNIPPETS,
};
pub use snippet::{snippets, SNIPPET_WINDOW};
pub use tokenize::{query_tokens, tokenize, MIN_TOKEN_LEN};
pub use types::{
    IndexStats, MemoryIndex, Note, NoteSummary, Posting, QueryResult, ResultSource,
    AGGREGATE_NOTE_ID,
};
