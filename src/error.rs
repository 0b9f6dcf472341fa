// Copyright 2025-present The cvsift Authors
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! Extraction failures are per document and never abort a search; they end
//! up in `SearchOutcome::failed_documents`. Corpus and request errors abort
//! the search before any matching happens.

use std::path::PathBuf;

use thiserror::Error;

/// Why a document's text could not be produced.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("document not found: {}", path.display())]
    Missing { path: PathBuf },

    #[error("document is not valid UTF-8: {}", path.display())]
    Decode { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ExtractionError {
    pub fn path(&self) -> &PathBuf {
        match self {
            ExtractionError::Missing { path }
            | ExtractionError::Decode { path }
            | ExtractionError::Io { path, .. } => path,
        }
    }
}

/// Failures while listing the corpus.
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("corpus root is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("failed to read corpus at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid manifest {}: {source}", path.display())]
    Manifest {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unsupported manifest version {found} (expected {expected})")]
    ManifestVersion { found: u32, expected: u32 },

    #[error("duplicate document id {0} in manifest")]
    DuplicateId(u64),
}

/// Configuration that cannot be used.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{field} must be at least {min}, got {value}")]
    OutOfRange {
        field: &'static str,
        min: usize,
        value: usize,
    },
}

/// Errors that abort a search.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("top_n must be at least 1")]
    InvalidTopN,

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Corpus(#[from] CorpusError),
}
