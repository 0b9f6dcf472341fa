// Copyright 2025-present The cvsift Authors
// SPDX-License-Identifier: Apache-2.0

//! The records that flow through a search.
//!
//! | Type             | Produced by        | Consumed by               |
//! |------------------|--------------------|---------------------------|
//! | `DocumentEntry`  | `DocumentSource`   | `TextExtractor`           |
//! | `LoadedDocument` | `load_documents`   | exact and fuzzy phases    |
//! | `FailedDocument` | `load_documents`   | caller, via the outcome   |
//! | `MatchRecord`    | exact/fuzzy phases | ranking, then the caller  |
//! | `SearchOutcome`  | orchestrator       | CLI / embedding app       |
//!
//! # Invariants
//!
//! - **MatchRecord**: `match_count == matched_keywords.len()`. Every mutation
//!   goes through [`MatchRecord::record`], which recounts.
//! - **SearchOutcome**: `results` is sorted by `match_count` descending and
//!   never longer than the requested top-N.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Exact-phase strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// Knuth-Morris-Pratt, once per keyword.
    #[default]
    Kmp,
    /// Boyer-Moore (bad character + good suffix), once per keyword.
    BoyerMoore,
    /// One Aho-Corasick pass for all keywords.
    AhoCorasick,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Kmp, Algorithm::BoyerMoore, Algorithm::AhoCorasick];

    pub fn label(self) -> &'static str {
        match self {
            Algorithm::Kmp => "KMP",
            Algorithm::BoyerMoore => "Boyer-Moore",
            Algorithm::AhoCorasick => "Aho-Corasick",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "kmp" => Ok(Algorithm::Kmp),
            "bm" | "boyer-moore" | "boyer_moore" => Ok(Algorithm::BoyerMoore),
            "ac" | "aho-corasick" | "aho_corasick" => Ok(Algorithm::AhoCorasick),
            other => Err(format!(
                "unknown algorithm '{}' (expected kmp, bm or ac)",
                other
            )),
        }
    }
}

/// One document in the corpus listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentEntry {
    pub id: u64,
    /// Applicant name, or the file stem when no name is known.
    pub display_name: String,
    pub path: PathBuf,
    /// Role or folder the document was filed under.
    #[serde(default)]
    pub category: Option<String>,
}

impl DocumentEntry {
    pub fn new(id: u64, display_name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            path: path.into(),
            category: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// A document whose text was extracted successfully.
#[derive(Debug, Clone)]
pub struct LoadedDocument {
    pub entry: DocumentEntry,
    /// Normalized text (lowercase, collapsed whitespace).
    pub text: String,
}

impl LoadedDocument {
    pub fn new(entry: DocumentEntry, text: impl Into<String>) -> Self {
        Self {
            entry,
            text: text.into(),
        }
    }
}

/// A document excluded from the search because extraction failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailedDocument {
    pub entry: DocumentEntry,
    pub reason: String,
}

const FUZZY_MARKER: &str = " (similar: ";

/// Label under which a fuzzy hit is recorded, e.g. `dog (similar: dig)`.
pub fn fuzzy_label(keyword: &str, word: &str) -> String {
    format!("{}{}{})", keyword, FUZZY_MARKER, word)
}

/// The keyword behind a fuzzy label, or `None` for an exact-hit key.
pub fn fuzzy_label_keyword(label: &str) -> Option<&str> {
    label
        .strip_suffix(')')
        .and_then(|rest| rest.find(FUZZY_MARKER).map(|at| &label[..at]))
}

/// Per-document aggregation of keyword hits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub document_id: u64,
    pub display_name: String,
    pub path: PathBuf,
    #[serde(default)]
    pub category: Option<String>,
    /// Keyword (or fuzzy label) → occurrence count.
    pub matched_keywords: BTreeMap<String, usize>,
    /// Number of distinct keys in `matched_keywords`.
    pub match_count: usize,
}

impl MatchRecord {
    pub fn new(entry: &DocumentEntry) -> Self {
        Self {
            document_id: entry.id,
            display_name: entry.display_name.clone(),
            path: entry.path.clone(),
            category: entry.category.clone(),
            matched_keywords: BTreeMap::new(),
            match_count: 0,
        }
    }

    /// Set `label`'s occurrence count and recompute `match_count`.
    pub fn record(&mut self, label: impl Into<String>, count: usize) {
        self.matched_keywords.insert(label.into(), count);
        self.recount();
    }

    /// Recompute `match_count` from the mapping.
    pub fn recount(&mut self) {
        self.match_count = self.matched_keywords.len();
    }

    /// Exact-hit entries.
    pub fn exact_hits(&self) -> impl Iterator<Item = (&str, usize)> {
        self.matched_keywords
            .iter()
            .filter(|(label, _)| fuzzy_label_keyword(label).is_none())
            .map(|(label, &count)| (label.as_str(), count))
    }

    /// Fuzzy-hit entries as `(label, count)`.
    pub fn fuzzy_hits(&self) -> impl Iterator<Item = (&str, usize)> {
        self.matched_keywords
            .iter()
            .filter(|(label, _)| fuzzy_label_keyword(label).is_some())
            .map(|(label, &count)| (label.as_str(), count))
    }

    /// Sum of occurrences over every entry.
    pub fn total_occurrences(&self) -> usize {
        self.matched_keywords.values().sum()
    }
}

/// Everything a search returns.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// Normalized keywords actually searched for.
    pub keywords: Vec<String>,
    pub algorithm: Algorithm,
    /// Ranked and truncated records.
    pub results: Vec<MatchRecord>,
    pub exact_phase_seconds: f64,
    /// Zero when every keyword had an exact hit.
    pub fuzzy_phase_seconds: f64,
    /// Documents whose text was available, hits or not.
    pub total_scanned: usize,
    /// Documents excluded because extraction failed.
    pub failed_documents: Vec<FailedDocument>,
}

impl SearchOutcome {
    pub fn empty(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            ..Self::default()
        }
    }
}
