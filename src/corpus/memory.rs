// Copyright 2025-present The cvsift Authors
// SPDX-License-Identifier: Apache-2.0

//! In-memory corpus: entries and their raw text side by side.
//!
//! Useful when the text already lives in memory (a database column, an
//! upstream PDF service) and in tests. It is both the source and the
//! extractor, so pass it twice: `Orchestrator::new(&corpus, &corpus, config)`.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::{CorpusError, ExtractionError};
use crate::types::DocumentEntry;
use crate::utils::normalize;

use super::{filter_entries, DocumentSource, TextExtractor};

#[derive(Debug, Clone, Default)]
pub struct MemoryCorpus {
    entries: Vec<DocumentEntry>,
    /// `None` marks a document whose extraction fails.
    texts: HashMap<u64, Option<String>>,
}

impl MemoryCorpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document; returns its id (sequential from 1).
    pub fn add(&mut self, name: &str, category: &str, text: &str) -> u64 {
        self.push(name, category, Some(text.to_string()))
    }

    /// Add a document whose extraction always fails with
    /// [`ExtractionError::Missing`].
    pub fn add_failing(&mut self, name: &str, category: &str) -> u64 {
        self.push(name, category, None)
    }

    fn push(&mut self, name: &str, category: &str, text: Option<String>) -> u64 {
        let id = self.entries.len() as u64 + 1;
        let path = PathBuf::from(category).join(format!("{}.txt", name));
        self.entries
            .push(DocumentEntry::new(id, name, path).with_category(category));
        self.texts.insert(id, text);
        id
    }

    pub fn entries(&self) -> &[DocumentEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl DocumentSource for MemoryCorpus {
    fn list_documents(
        &self,
        categories: &[String],
        limit_per_category: Option<usize>,
    ) -> Result<Vec<DocumentEntry>, CorpusError> {
        Ok(filter_entries(self.entries.iter().cloned(), categories, limit_per_category))
    }
}

impl TextExtractor for MemoryCorpus {
    fn extract(&self, entry: &DocumentEntry) -> Result<String, ExtractionError> {
        match self.texts.get(&entry.id) {
            Some(Some(text)) => Ok(normalize(text)),
            _ => Err(ExtractionError::Missing {
                path: entry.path.clone(),
            }),
        }
    }
}
