// Copyright 2025-present The cvsift Authors
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit tests, integration tests and benches.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use std::fs;
use std::io;
use std::path::Path;

use crate::types::{DocumentEntry, LoadedDocument};

/// Create a loaded document with the given text, as-is (not normalized).
pub fn make_doc(id: u64, text: &str) -> LoadedDocument {
    LoadedDocument::new(
        DocumentEntry::new(id, format!("Applicant {}", id), format!("cv{}.txt", id)),
        text,
    )
}

/// Loaded documents with ids 1.. in slice order.
pub fn make_docs(texts: &[&str]) -> Vec<LoadedDocument> {
    texts
        .iter()
        .enumerate()
        .map(|(i, text)| make_doc(i as u64 + 1, text))
        .collect()
}

/// Document ids of a result list, in rank order.
pub fn result_ids(records: &[crate::MatchRecord]) -> Vec<u64> {
    records.iter().map(|r| r.document_id).collect()
}

/// Brute-force start indices of `pattern` in `text`, in chars.
///
/// The oracle the fast matchers are checked against.
pub fn naive_find_all(text: &str, pattern: &str) -> Vec<usize> {
    let text: Vec<char> = text.chars().collect();
    let pattern: Vec<char> = pattern.chars().collect();
    if pattern.is_empty() || pattern.len() > text.len() {
        return Vec::new();
    }
    (0..=text.len() - pattern.len())
        .filter(|&i| text[i..i + pattern.len()] == pattern[..])
        .collect()
}

const SKILLS: &[&str] = &[
    "python", "java", "javascript", "typescript", "react", "html", "css", "sql", "mysql",
    "postgresql", "docker", "kubernetes", "rust", "golang", "excel", "payroll", "recruiting",
    "figma", "photoshop", "accounting", "marketing", "leadership", "communication",
];

const FILLER: &[&str] = &[
    "experienced", "with", "and", "in", "the", "team", "projects", "years", "of", "worked",
    "on", "senior", "junior", "developer", "manager", "designer", "built", "led", "a",
];

/// A deterministic synthetic resume of roughly `words` words.
///
/// Uses a small linear congruential generator so benches and tests see the
/// same corpus on every run.
pub fn synthetic_resume(seed: u64, words: usize) -> String {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    let mut out = Vec::with_capacity(words);
    for _ in 0..words {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        let pick = (state >> 33) as usize;
        let word = if pick % 5 == 0 {
            SKILLS[pick / 5 % SKILLS.len()]
        } else {
            FILLER[pick % FILLER.len()]
        };
        out.push(word);
    }
    out.join(" ")
}

/// `count` synthetic resumes.
pub fn synthetic_corpus(count: usize, words: usize) -> Vec<LoadedDocument> {
    (0..count)
        .map(|i| make_doc(i as u64 + 1, &synthetic_resume(i as u64, words)))
        .collect()
}

/// Write `root/<category>/<name>` files for directory-corpus tests.
pub fn write_corpus(root: &Path, files: &[(&str, &str, &str)]) -> io::Result<()> {
    for (category, name, text) in files {
        let dir = root.join(category);
        fs::create_dir_all(&dir)?;
        fs::write(dir.join(name), text)?;
    }
    Ok(())
}
