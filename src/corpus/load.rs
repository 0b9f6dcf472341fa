// Copyright 2025-present The cvsift Authors
// SPDX-License-Identifier: Apache-2.0

//! Parallel text extraction.
//!
//! Reading and normalizing a few hundred resumes is embarrassingly parallel.
//! Rayon makes this trivial: `par_iter()` over entries, `collect()` keeps the
//! listing order. A failed extraction becomes a [`FailedDocument`] and the
//! rest of the corpus loads as usual.

#[cfg(feature = "parallel")]
use std::sync::atomic::{AtomicUsize, Ordering};

#[cfg(feature = "parallel")]
use indicatif::ProgressBar;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::ExtractionError;
use crate::types::{DocumentEntry, FailedDocument, LoadedDocument};

use super::TextExtractor;

/// Extraction results, split by outcome, each in listing order.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub loaded: Vec<LoadedDocument>,
    pub failed: Vec<FailedDocument>,
}

impl LoadReport {
    fn from_results(results: Vec<(DocumentEntry, Result<String, ExtractionError>)>) -> Self {
        let mut report = LoadReport::default();
        for (entry, result) in results {
            match result {
                Ok(text) => report.loaded.push(LoadedDocument::new(entry, text)),
                Err(err) => {
                    tracing::warn!(id = entry.id, path = %entry.path.display(), error = %err, "extraction failed");
                    report.failed.push(FailedDocument {
                        entry,
                        reason: err.to_string(),
                    });
                }
            }
        }
        report
    }
}

/// Extract every entry, in parallel when `parallel` is set and available.
pub fn load_documents<E: TextExtractor + ?Sized>(
    extractor: &E,
    entries: Vec<DocumentEntry>,
    parallel: bool,
) -> LoadReport {
    #[cfg(feature = "parallel")]
    {
        if parallel {
            let results = entries
                .into_par_iter()
                .map(|entry| {
                    let result = extractor.extract(&entry);
                    (entry, result)
                })
                .collect();
            return LoadReport::from_results(results);
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    let results = entries
        .into_iter()
        .map(|entry| {
            let result = extractor.extract(&entry);
            (entry, result)
        })
        .collect();
    LoadReport::from_results(results)
}

/// Extract every entry in parallel with progress reporting.
#[cfg(feature = "parallel")]
pub fn load_documents_with_progress<E: TextExtractor + ?Sized>(
    extractor: &E,
    entries: Vec<DocumentEntry>,
    progress: &ProgressBar,
) -> LoadReport {
    let counter = AtomicUsize::new(0);
    let total = entries.len();
    progress.set_length(total as u64);

    let results = entries
        .into_par_iter()
        .map(|entry| {
            let result = extractor.extract(&entry);

            let count = counter.fetch_add(1, Ordering::Relaxed) + 1;
            progress.inc(1);
            if count % 10 == 0 || count == total {
                progress.set_message(format!("{}/{}", count, total));
            }

            (entry, result)
        })
        .collect();

    LoadReport::from_results(results)
}
