// Copyright 2025-present The cvsift Authors
// SPDX-License-Identifier: Apache-2.0

//! The orchestrator: list, extract, then run both phases.

use crate::automaton::AutomatonCache;
use crate::config::{SearchConfig, SearchRequest};
use crate::corpus::{load_documents, DocumentSource, LoadReport, TextExtractor};
use crate::error::SearchError;
use crate::types::SearchOutcome;
use crate::utils::normalize_keywords;

use super::run_phases;

/// Owns everything a search needs: where documents come from, how their text
/// is produced, the engine settings and the automaton cache.
///
/// Searches take `&self`, so one orchestrator can serve concurrent queries.
#[derive(Debug)]
pub struct Orchestrator<S, E> {
    source: S,
    extractor: E,
    config: SearchConfig,
    cache: AutomatonCache,
}

impl<S, E> Orchestrator<S, E>
where
    S: DocumentSource,
    E: TextExtractor,
{
    pub fn new(source: S, extractor: E, config: SearchConfig) -> Result<Self, SearchError> {
        config.validate()?;
        let cache = AutomatonCache::new(config.automaton_cache_capacity);
        Ok(Self {
            source,
            extractor,
            config,
            cache,
        })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn cache(&self) -> &AutomatonCache {
        &self.cache
    }

    /// Run one query end to end.
    ///
    /// An empty keyword list (after normalization) returns an empty outcome
    /// without listing or extracting anything. Documents that fail extraction
    /// are reported in `failed_documents` and do not count as scanned.
    pub fn search(&self, request: &SearchRequest) -> Result<SearchOutcome, SearchError> {
        let top_n = request.validate(&self.config)?;
        let keywords = normalize_keywords(&request.keywords);
        if keywords.is_empty() {
            tracing::debug!("no usable keywords, skipping search");
            return Ok(SearchOutcome::empty(request.algorithm));
        }

        let _span = tracing::info_span!(
            "search",
            algorithm = %request.algorithm,
            keywords = keywords.len(),
            top_n
        )
        .entered();

        let entries = self
            .source
            .list_documents(&request.categories, request.limit_per_category)?;
        let LoadReport { loaded, failed } =
            load_documents(&self.extractor, entries, self.config.use_parallel());
        if !failed.is_empty() {
            tracing::warn!(failed = failed.len(), "some documents could not be read");
        }

        let mut outcome = run_phases(
            &loaded,
            keywords,
            request.algorithm,
            top_n,
            &self.config,
            &self.cache,
        );
        outcome.failed_documents = failed;
        Ok(outcome)
    }

    /// Search documents already loaded by the caller, reusing this
    /// orchestrator's config and automaton cache.
    pub fn search_loaded(&self, report: LoadReport, request: &SearchRequest) -> Result<SearchOutcome, SearchError> {
        let top_n = request.validate(&self.config)?;
        let keywords = normalize_keywords(&request.keywords);
        if keywords.is_empty() {
            return Ok(SearchOutcome::empty(request.algorithm));
        }
        let mut outcome = run_phases(
            &report.loaded,
            keywords,
            request.algorithm,
            top_n,
            &self.config,
            &self.cache,
        );
        outcome.failed_documents = report.failed;
        Ok(outcome)
    }
}
