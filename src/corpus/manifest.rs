// Copyright 2025-present The cvsift Authors
// SPDX-License-Identifier: Apache-2.0

//! JSON manifest corpus: who applied for what, and where their resume is.
//!
//! ```json
//! {
//!   "version": 1,
//!   "documents": [
//!     { "id": 7, "name": "Ana Putri", "path": "HR/ana.txt", "category": "HR" }
//!   ]
//! }
//! ```
//!
//! Relative paths resolve against the manifest's own directory.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::CorpusError;
use crate::types::DocumentEntry;

use super::{filter_entries, DocumentSource};

pub const MANIFEST_VERSION: u32 = 1;

#[derive(Serialize, Deserialize, Clone, Debug)]
struct InputManifest {
    version: u32,
    documents: Vec<ManifestDocument>,
}

/// One applicant row.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ManifestDocument {
    pub id: u64,
    pub name: String,
    pub path: PathBuf,
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ManifestCorpus {
    entries: Vec<DocumentEntry>,
}

impl ManifestCorpus {
    /// Parse a manifest file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CorpusError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| CorpusError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let manifest: InputManifest = serde_json::from_str(&raw).map_err(|source| CorpusError::Manifest {
            path: path.to_path_buf(),
            source,
        })?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Self::from_documents(manifest.version, manifest.documents, base)
    }

    /// Build from already-parsed rows; relative paths are joined onto `base`.
    pub fn from_documents(
        version: u32,
        documents: Vec<ManifestDocument>,
        base: &Path,
    ) -> Result<Self, CorpusError> {
        if version != MANIFEST_VERSION {
            return Err(CorpusError::ManifestVersion {
                found: version,
                expected: MANIFEST_VERSION,
            });
        }

        let mut seen = HashSet::new();
        let mut entries = Vec::with_capacity(documents.len());
        for doc in documents {
            if !seen.insert(doc.id) {
                return Err(CorpusError::DuplicateId(doc.id));
            }
            let path = if doc.path.is_absolute() {
                doc.path
            } else {
                base.join(doc.path)
            };
            entries.push(DocumentEntry {
                id: doc.id,
                display_name: doc.name,
                path,
                category: doc.category,
            });
        }

        // Category first, then path; the sort is stable so equal keys keep manifest order
        entries.sort_by(|a, b| (&a.category, &a.path).cmp(&(&b.category, &b.path)));
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[DocumentEntry] {
        &self.entries
    }
}

impl DocumentSource for ManifestCorpus {
    fn list_documents(
        &self,
        categories: &[String],
        limit_per_category: Option<usize>,
    ) -> Result<Vec<DocumentEntry>, CorpusError> {
        Ok(filter_entries(self.entries.iter().cloned(), categories, limit_per_category))
    }
}
