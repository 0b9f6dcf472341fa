// Copyright 2025-present The cvsift Authors
// SPDX-License-Identifier: Apache-2.0

//! Plain-text extraction.

use std::fs;
use std::io::ErrorKind;

use crate::error::ExtractionError;
use crate::types::DocumentEntry;
use crate::utils::normalize;

use super::TextExtractor;

/// Reads each document as UTF-8 and normalizes it.
///
/// PDFs and other binary formats fail with [`ExtractionError::Decode`] and
/// land in the failure list; convert them to text beforehand.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, entry: &DocumentEntry) -> Result<String, ExtractionError> {
        let path = &entry.path;
        let bytes = fs::read(path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => ExtractionError::Missing { path: path.clone() },
            _ => ExtractionError::Io {
                path: path.clone(),
                source,
            },
        })?;
        let text = String::from_utf8(bytes).map_err(|_| ExtractionError::Decode { path: path.clone() })?;
        Ok(normalize(&text))
    }
}
