// Copyright 2025-present The cvsift Authors
// SPDX-License-Identifier: Apache-2.0

//! String helpers shared by the extractor, the matchers and the orchestrator.
//!
//! Document text and keywords go through the same `normalize`, so a keyword
//! typed as "  Café " lines up with a resume that says "CAFÉ".

use std::collections::HashSet;

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Normalize a string for matching: compose, lowercase, and collapse whitespace.
///
/// - "  Python   Developer " → "python developer"
/// - "Résumé" → "résumé"
/// - "cafe\u{301}" (e + combining acute) → "café"
///
/// Diacritics are kept, so a keyword always matches its own spelling.
///
/// # Algorithm (with unicode-normalization feature)
///
/// 1. NFC normalize (compose base + combining marks where a precomposed
///    character exists)
/// 2. Lowercase
/// 3. Collapse whitespace (which also trims both ends)
#[cfg(feature = "unicode-normalization")]
pub fn normalize(value: &str) -> String {
    value
        .nfc()
        .collect::<String>()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lowercase and collapse whitespace only.
#[cfg(not(feature = "unicode-normalization"))]
pub fn normalize(value: &str) -> String {
    value
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Normalize a raw keyword list.
///
/// Keywords that normalize to nothing are dropped. Duplicates collapse onto
/// their first occurrence, so the output order follows the caller's order.
pub fn normalize_keywords<S: AsRef<str>>(keywords: &[S]) -> Vec<String> {
    let mut seen = HashSet::new();
    keywords
        .iter()
        .map(|k| normalize(k.as_ref()))
        .filter(|k| !k.is_empty())
        .filter(|k| seen.insert(k.clone()))
        .collect()
}

/// Split text into its distinct words, in order of first appearance.
///
/// A word is a whitespace-separated run with leading and trailing
/// punctuation removed ("python," → "python", "(sql)" → "sql"). Inner
/// punctuation is kept so "node.js" and "c++" survive as single words.
pub fn distinct_words(text: &str) -> Vec<&str> {
    let mut seen = HashSet::new();
    text.split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric() && c != '+' && c != '#'))
        .filter(|w| !w.is_empty())
        .filter(|w| seen.insert(*w))
        .collect()
}

/// Length in Unicode scalar values, the unit every matcher reports positions in.
#[inline]
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}
