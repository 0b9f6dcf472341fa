// Copyright 2025-present The cvsift Authors
// SPDX-License-Identifier: Apache-2.0

//! Where documents come from and how their text is produced.
//!
//! The search never touches the filesystem directly. It asks a
//! [`DocumentSource`] for the listing and a [`TextExtractor`] for each
//! document's text, so a database-backed applicant table or a PDF extractor
//! can be dropped in without changing the matching code.
//!
//! Sources shipped here:
//!
//! - [`DirectoryCorpus`]: `root/<category>/<file>` on disk
//! - [`ManifestCorpus`]: a JSON listing of applicants and their files
//! - [`MemoryCorpus`]: in-memory entries and texts (also an extractor)

mod directory;
mod extract;
mod load;
mod manifest;
mod memory;

pub use directory::DirectoryCorpus;
pub use extract::PlainTextExtractor;
#[cfg(feature = "parallel")]
pub use load::load_documents_with_progress;
pub use load::{load_documents, LoadReport};
pub use manifest::{ManifestCorpus, ManifestDocument, MANIFEST_VERSION};
pub use memory::MemoryCorpus;

use std::collections::HashMap;

use crate::error::{CorpusError, ExtractionError};
use crate::types::DocumentEntry;

/// Lists the documents a search should scan.
pub trait DocumentSource {
    /// Ordered entries, optionally restricted to `categories` (empty = all)
    /// and to the first `limit_per_category` documents of each category.
    fn list_documents(
        &self,
        categories: &[String],
        limit_per_category: Option<usize>,
    ) -> Result<Vec<DocumentEntry>, CorpusError>;
}

/// Produces a document's normalized text.
///
/// Implementations must be shareable across threads: extraction runs on
/// rayon workers under the `parallel` feature.
pub trait TextExtractor: Sync {
    fn extract(&self, entry: &DocumentEntry) -> Result<String, ExtractionError>;
}

impl<T: DocumentSource + ?Sized> DocumentSource for &T {
    fn list_documents(
        &self,
        categories: &[String],
        limit_per_category: Option<usize>,
    ) -> Result<Vec<DocumentEntry>, CorpusError> {
        (**self).list_documents(categories, limit_per_category)
    }
}

impl<T: TextExtractor + ?Sized> TextExtractor for &T {
    fn extract(&self, entry: &DocumentEntry) -> Result<String, ExtractionError> {
        (**self).extract(entry)
    }
}

impl<T: DocumentSource + ?Sized> DocumentSource for Box<T> {
    fn list_documents(
        &self,
        categories: &[String],
        limit_per_category: Option<usize>,
    ) -> Result<Vec<DocumentEntry>, CorpusError> {
        (**self).list_documents(categories, limit_per_category)
    }
}

/// Keep entries whose category is in `categories` (all when empty), then at
/// most `limit` per category, preserving order.
pub(crate) fn filter_entries(
    entries: impl IntoIterator<Item = DocumentEntry>,
    categories: &[String],
    limit: Option<usize>,
) -> Vec<DocumentEntry> {
    let mut taken: HashMap<Option<String>, usize> = HashMap::new();
    entries
        .into_iter()
        .filter(|entry| {
            categories.is_empty()
                || entry
                    .category
                    .as_ref()
                    .is_some_and(|c| categories.iter().any(|want| want == c))
        })
        .filter(|entry| {
            let count = taken.entry(entry.category.clone()).or_insert(0);
            *count += 1;
            limit.map_or(true, |limit| *count <= limit)
        })
        .collect()
}
