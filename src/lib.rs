// Copyright 2025-present The cvsift Authors
// SPDX-License-Identifier: Apache-2.0

//! Keyword matching over resume text, exact first and fuzzy second.
//!
//! This crate scans a corpus of resumes for a list of keywords and ranks the
//! documents by how many distinct keywords they contain. Exact occurrences
//! are found with KMP, Boyer-Moore or Aho-Corasick; keywords that occur
//! nowhere get a second chance through Levenshtein distance.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │   corpus     │────▶│   search     │────▶│   scoring    │
//! │ (list, load) │     │ (exact, then │     │ (sort, top-N)│
//! │              │     │  fuzzy)      │     │              │
//! └──────────────┘     └──────────────┘     └──────────────┘
//!                             │
//!          ┌──────────────────┼──────────────────┐
//!          ▼                  ▼                  ▼
//! ┌──────────────┐   ┌────────────────┐   ┌──────────────┐
//! │    exact     │   │   automaton    │   │    fuzzy     │
//! │ (KMP, Boyer- │   │ (Aho-Corasick, │   │ (Levenshtein)│
//! │  Moore)      │   │  cache)        │   │              │
//! └──────────────┘   └────────────────┘   └──────────────┘
//! ```
//!
//! | Module      | Role                                              |
//! |-------------|---------------------------------------------------|
//! | `exact`     | Single-pattern matchers behind `PatternMatcher`   |
//! | `automaton` | Multi-pattern trie with failure links, memoized   |
//! | `fuzzy`     | Edit distance and its bounded variant             |
//! | `search`    | Two-phase search and the `Orchestrator`           |
//! | `scoring`   | Ranking by distinct keywords matched              |
//! | `corpus`    | Document listing and text extraction              |
//! | `contracts` | Debug-build invariant checks                      |
//!
//! # Usage
//!
//! ```
//! use cvsift::{Algorithm, MemoryCorpus, Orchestrator, SearchConfig, SearchRequest};
//!
//! let mut corpus = MemoryCorpus::new();
//! corpus.add("Ana", "HR", "Recruiting, payroll and Excel");
//! corpus.add("Budi", "IT", "Rust, Python and SQL. More SQL.");
//!
//! let orchestrator = Orchestrator::new(&corpus, &corpus, SearchConfig::default()).unwrap();
//! let request = SearchRequest::new(["sql", "pyhton"], Algorithm::AhoCorasick, 3);
//! let outcome = orchestrator.search(&request).unwrap();
//!
//! assert_eq!(outcome.results[0].display_name, "Budi");
//! assert_eq!(outcome.results[0].matched_keywords["sql"], 2);
//! assert_eq!(outcome.results[0].matched_keywords["pyhton (similar: python)"], 1);
//! ```

// Module declarations
pub mod automaton;
pub mod config;
pub mod contracts;
pub mod corpus;
pub mod error;
pub mod exact;
pub mod fuzzy;
mod scoring;
mod search;
pub mod testing;
mod types;
mod utils;

// Re-exports for public API
pub use automaton::{AhoCorasick, AutomatonCache};
pub use config::{SearchConfig, SearchRequest};
pub use corpus::{
    load_documents, DirectoryCorpus, DocumentSource, LoadReport, ManifestCorpus, MemoryCorpus,
    PlainTextExtractor, TextExtractor,
};
pub use error::{ConfigError, CorpusError, ExtractionError, SearchError};
pub use exact::{boyer_moore_search, kmp_search, BoyerMoore, Kmp, PatternMatcher};
pub use fuzzy::{levenshtein_distance, levenshtein_within};
pub use scoring::{compare_records, rank_records};
pub use search::{search_documents, Orchestrator};
pub use types::{
    fuzzy_label, fuzzy_label_keyword, Algorithm, DocumentEntry, FailedDocument, LoadedDocument,
    MatchRecord, SearchOutcome,
};
pub use utils::{distinct_words, normalize, normalize_keywords};
