// Copyright 2025-present The cvsift Authors
// SPDX-License-Identifier: Apache-2.0

//! A corpus laid out as `root/<category>/<file>`.
//!
//! Each immediate subdirectory of the root is a category (usually a role such
//! as `HR` or `Designer`) and every regular file inside it is one document.
//! Hidden entries are skipped, nested directories are not descended into,
//! and files directly under the root are ignored.
//!
//! Ids are assigned over the full sorted listing before any filtering, so a
//! document keeps its id whatever categories a query selects.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::CorpusError;
use crate::types::DocumentEntry;

use super::{filter_entries, DocumentSource};

#[derive(Debug, Clone)]
pub struct DirectoryCorpus {
    root: PathBuf,
}

impl DirectoryCorpus {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Category names, sorted.
    pub fn categories(&self) -> Result<Vec<String>, CorpusError> {
        Ok(self
            .category_dirs()?
            .into_iter()
            .map(|(name, _)| name)
            .collect())
    }

    fn category_dirs(&self) -> Result<Vec<(String, PathBuf)>, CorpusError> {
        if !self.root.is_dir() {
            return Err(CorpusError::NotADirectory(self.root.clone()));
        }
        let mut dirs = Vec::new();
        for path in read_dir_sorted(&self.root)? {
            let Some(name) = visible_name(&path) else {
                continue;
            };
            if path.is_dir() {
                dirs.push((name, path));
            } else {
                tracing::debug!(path = %path.display(), "ignoring file outside any category");
            }
        }
        Ok(dirs)
    }

    /// The full listing, ids assigned in order.
    fn all_entries(&self) -> Result<Vec<DocumentEntry>, CorpusError> {
        let mut entries = Vec::new();
        let mut next_id = 1;
        for (category, dir) in self.category_dirs()? {
            for path in read_dir_sorted(&dir)? {
                if visible_name(&path).is_none() || !path.is_file() {
                    continue;
                }
                let display_name = path
                    .file_stem()
                    .map(|stem| stem.to_string_lossy().into_owned())
                    .unwrap_or_default();
                entries.push(DocumentEntry::new(next_id, display_name, path).with_category(category.clone()));
                next_id += 1;
            }
        }
        Ok(entries)
    }
}

impl DocumentSource for DirectoryCorpus {
    fn list_documents(
        &self,
        categories: &[String],
        limit_per_category: Option<usize>,
    ) -> Result<Vec<DocumentEntry>, CorpusError> {
        let entries = self.all_entries()?;
        let listed = filter_entries(entries, categories, limit_per_category);
        tracing::debug!(root = %self.root.display(), documents = listed.len(), "listed corpus");
        Ok(listed)
    }
}

fn read_dir_sorted(dir: &Path) -> Result<Vec<PathBuf>, CorpusError> {
    let io_err = |source| CorpusError::Io {
        path: dir.to_path_buf(),
        source,
    };
    let mut paths = fs::read_dir(dir)
        .map_err(io_err)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(io_err)?;
    paths.sort();
    Ok(paths)
}

/// File name, unless the entry is hidden.
fn visible_name(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_string_lossy().into_owned();
    (!name.starts_with('.')).then_some(name)
}
