// Copyright 2025-present The cvsift Authors
// SPDX-License-Identifier: Apache-2.0

//! Search configuration and per-query requests.
//!
//! `SearchConfig` is long-lived and owned by the orchestrator; `SearchRequest`
//! is one query. Both validate before any document is touched.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, SearchError};
use crate::types::Algorithm;

/// Default maximum edit distance for a fuzzy hit.
pub const DEFAULT_FUZZY_THRESHOLD: usize = 2;

/// Default number of memoized automata.
pub const DEFAULT_AUTOMATON_CACHE_CAPACITY: usize = 16;

/// Engine-wide settings.
///
/// Every field has a default, so a config file only lists what it overrides:
///
/// ```json
/// { "fuzzy_threshold": 1, "parallel": false }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    /// Maximum edit distance for a fuzzy hit. Zero disables the fuzzy phase.
    pub fuzzy_threshold: usize,
    /// Optional cap on `top_n`; requests asking for more are clamped to it.
    /// `None` (the default) returns as many results as the caller asks for.
    pub max_top_n: Option<usize>,
    /// Zero disables automaton memoization.
    pub automaton_cache_capacity: usize,
    /// Shard documents across rayon workers (needs the `parallel` feature).
    pub parallel: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
            max_top_n: None,
            automaton_cache_capacity: DEFAULT_AUTOMATON_CACHE_CAPACITY,
            parallel: true,
        }
    }
}

impl SearchConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_top_n == Some(0) {
            return Err(ConfigError::OutOfRange {
                field: "max_top_n",
                min: 1,
                value: 0,
            });
        }
        Ok(())
    }

    /// Load and validate a JSON config file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: SearchConfig =
            serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Whether document sharding is actually available and requested.
    pub fn use_parallel(&self) -> bool {
        cfg!(feature = "parallel") && self.parallel
    }
}

/// One query against the corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Raw keywords; normalized by the search.
    pub keywords: Vec<String>,
    pub algorithm: Algorithm,
    pub top_n: usize,
    /// Restrict the corpus to these categories; empty means all.
    #[serde(default)]
    pub categories: Vec<String>,
    /// Take at most this many documents from each category.
    #[serde(default)]
    pub limit_per_category: Option<usize>,
}

impl SearchRequest {
    pub fn new<I, S>(keywords: I, algorithm: Algorithm, top_n: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keywords: keywords.into_iter().map(Into::into).collect(),
            algorithm,
            top_n,
            categories: Vec::new(),
            limit_per_category: None,
        }
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_limit_per_category(mut self, limit: usize) -> Self {
        self.limit_per_category = Some(limit);
        self
    }

    /// Check the request and return the effective top-N.
    ///
    /// Zero is rejected; when `config.max_top_n` is set, anything above it is
    /// clamped.
    pub fn validate(&self, config: &SearchConfig) -> Result<usize, SearchError> {
        effective_top_n(self.top_n, config)
    }
}

pub(crate) fn effective_top_n(top_n: usize, config: &SearchConfig) -> Result<usize, SearchError> {
    if top_n == 0 {
        return Err(SearchError::InvalidTopN);
    }
    match config.max_top_n {
        Some(max) if top_n > max => {
            tracing::warn!(requested = top_n, max, "top_n above configured maximum, clamping");
            Ok(max)
        }
        _ => Ok(top_n),
    }
}
