// Copyright 2025-present The cvsift Authors
// SPDX-License-Identifier: Apache-2.0

//! Search: where the rubber meets the road.
//!
//! Everything culminates here. The two-phase strategy (exact → fuzzy) answers
//! most queries with the exact matchers alone and only pays for edit distance
//! when a keyword found nothing anywhere:
//!
//! 1. **Exact**: KMP, Boyer-Moore or Aho-Corasick over every document.
//! 2. **Fuzzy**: for keywords with zero exact hits, the first word within the
//!    edit threshold in each document.
//! 3. **Finalize**: recount, stable sort by distinct keywords matched,
//!    truncate to top-N.
//!
//! [`search_documents`] is the pure core over text that is already in memory.
//! [`Orchestrator`] adds the corpus listing and text extraction around it.

mod exact;
mod fuzzy;
mod orchestrator;

use std::collections::HashSet;
use std::time::Instant;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::automaton::AutomatonCache;
use crate::config::{effective_top_n, SearchConfig};
use crate::contracts::check_fuzzy_excludes_exact;
use crate::error::SearchError;
use crate::scoring::rank_records;
use crate::types::{Algorithm, LoadedDocument, MatchRecord, SearchOutcome};
use crate::utils::{normalize, normalize_keywords};

pub use orchestrator::Orchestrator;

/// Search documents that are already loaded.
///
/// Keywords and document text both go through [`normalize`](crate::normalize)
/// here, so callers may pass raw user input and raw text. The outcome's
/// `failed_documents` is always empty: there is no extraction step.
///
/// ```
/// use cvsift::{search_documents, Algorithm, DocumentEntry, LoadedDocument, SearchConfig};
///
/// let docs = vec![LoadedDocument::new(DocumentEntry::new(1, "Ana", "ana.txt"), "cat cat dig")];
/// let outcome = search_documents(&docs, &["Cat", "dog"], Algorithm::Kmp, 3, &SearchConfig::default()).unwrap();
///
/// assert_eq!(outcome.results.len(), 1);
/// assert_eq!(outcome.results[0].matched_keywords["cat"], 2);
/// assert_eq!(outcome.results[0].matched_keywords["dog (similar: dig)"], 1);
/// ```
pub fn search_documents<S: AsRef<str>>(
    documents: &[LoadedDocument],
    keywords: &[S],
    algorithm: Algorithm,
    top_n: usize,
    config: &SearchConfig,
) -> Result<SearchOutcome, SearchError> {
    config.validate()?;
    let top_n = effective_top_n(top_n, config)?;
    let keywords = normalize_keywords(keywords);
    if keywords.is_empty() {
        return Ok(SearchOutcome::empty(algorithm));
    }
    let cache = AutomatonCache::new(0);
    Ok(run_phases(documents, keywords, algorithm, top_n, config, &cache))
}

/// Both phases plus finalization over normalized, non-empty keywords.
pub(crate) fn run_phases(
    documents: &[LoadedDocument],
    keywords: Vec<String>,
    algorithm: Algorithm,
    top_n: usize,
    config: &SearchConfig,
    cache: &AutomatonCache,
) -> SearchOutcome {
    let parallel = config.use_parallel();

    // Same step as the keywords; a no-op for text an extractor already normalized
    let normalized = map_documents(documents, parallel, |doc| {
        LoadedDocument::new(doc.entry.clone(), normalize(&doc.text))
    });
    let documents = normalized.as_slice();

    let exact_start = Instant::now();
    let exact_slots = {
        let _span = tracing::debug_span!("exact_phase", %algorithm, keywords = keywords.len()).entered();
        exact::exact_phase(documents, &keywords, algorithm, cache, parallel)
    };
    let exact_phase_seconds = exact_start.elapsed().as_secs_f64();

    let exact_hit_keywords: HashSet<String> = exact_slots
        .iter()
        .flatten()
        .flat_map(|record| record.matched_keywords.keys().cloned())
        .collect();
    let unmatched: Vec<String> = keywords
        .iter()
        .filter(|k| !exact_hit_keywords.contains(*k))
        .cloned()
        .collect();
    tracing::debug!(
        seconds = exact_phase_seconds,
        unmatched = unmatched.len(),
        "exact phase done"
    );

    let (fuzzy_labels, fuzzy_phase_seconds) = if unmatched.is_empty() || config.fuzzy_threshold == 0 {
        (Vec::new(), 0.0)
    } else {
        let fuzzy_start = Instant::now();
        let labels = {
            let _span = tracing::debug_span!("fuzzy_phase", keywords = unmatched.len()).entered();
            fuzzy::fuzzy_phase(documents, &unmatched, config.fuzzy_threshold, parallel)
        };
        let seconds = fuzzy_start.elapsed().as_secs_f64();
        tracing::debug!(seconds, "fuzzy phase done");
        (labels, seconds)
    };

    let records = merge_phases(documents, exact_slots, fuzzy_labels);
    check_fuzzy_excludes_exact(&records, &exact_hit_keywords);

    let results = rank_records(records, top_n);
    tracing::info!(
        scanned = documents.len(),
        results = results.len(),
        exact_seconds = exact_phase_seconds,
        fuzzy_seconds = fuzzy_phase_seconds,
        "search complete"
    );

    SearchOutcome {
        keywords,
        algorithm,
        results,
        exact_phase_seconds,
        fuzzy_phase_seconds,
        total_scanned: documents.len(),
        failed_documents: Vec::new(),
    }
}

/// Fold fuzzy labels into the exact-phase records.
///
/// Output is in creation order: records from the exact phase in document
/// order, then records first created by the fuzzy phase in document order.
fn merge_phases(
    documents: &[LoadedDocument],
    exact_slots: Vec<Option<MatchRecord>>,
    fuzzy_labels: Vec<Vec<String>>,
) -> Vec<MatchRecord> {
    let mut fuzzy_labels = fuzzy_labels.into_iter();
    let mut records = Vec::new();
    let mut fuzzy_only = Vec::new();

    for (doc, slot) in documents.iter().zip(exact_slots) {
        let labels = fuzzy_labels.next().unwrap_or_default();
        match slot {
            Some(mut record) => {
                for label in labels {
                    record.record(label, 1);
                }
                records.push(record);
            }
            None if !labels.is_empty() => {
                let mut record = MatchRecord::new(&doc.entry);
                for label in labels {
                    record.record(label, 1);
                }
                fuzzy_only.push(record);
            }
            None => {}
        }
    }

    records.extend(fuzzy_only);
    records
}

/// Map every document through `f`, in order, across rayon workers when
/// `parallel` is set and the feature is enabled.
pub(crate) fn map_documents<T, F>(documents: &[LoadedDocument], parallel: bool, f: F) -> Vec<T>
where
    T: Send,
    F: Fn(&LoadedDocument) -> T + Send + Sync,
{
    #[cfg(feature = "parallel")]
    {
        if parallel {
            return documents.par_iter().map(f).collect();
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    documents.iter().map(f).collect()
}
