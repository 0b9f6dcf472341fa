// Copyright 2025-present The cvsift Authors
// SPDX-License-Identifier: Apache-2.0

//! Phase 2: approximate hits for keywords nobody matched exactly.
//!
//! Only keywords with zero exact hits across the whole corpus get here, so a
//! typo in the query ("pyhton") or a typo in a resume ("javascipt") still
//! surfaces something. For each such keyword the first word in the document
//! within the edit threshold wins, and is recorded once.

use crate::fuzzy::{levenshtein_distance, levenshtein_within};
use crate::types::{fuzzy_label, LoadedDocument};
use crate::utils::{char_len, distinct_words};

use super::map_documents;

/// The first word of `words` within `threshold` edits of `keyword`.
///
/// Identical words (distance 0) never qualify.
pub(crate) fn closest_word<'a>(keyword: &str, words: &[&'a str], threshold: usize) -> Option<&'a str> {
    let keyword_len = char_len(keyword);
    words.iter().copied().find(|word| {
        if char_len(word).abs_diff(keyword_len) > threshold {
            return false;
        }
        if !levenshtein_within(keyword, word, threshold) {
            return false;
        }
        let distance = levenshtein_distance(keyword, word);
        distance > 0 && distance <= threshold
    })
}

/// Run the fuzzy phase for `unmatched` keywords.
///
/// Returns, per document, the fuzzy labels found in keyword order.
pub(crate) fn fuzzy_phase(
    documents: &[LoadedDocument],
    unmatched: &[String],
    threshold: usize,
    parallel: bool,
) -> Vec<Vec<String>> {
    map_documents(documents, parallel, |doc| {
        let words = distinct_words(&doc.text);
        unmatched
            .iter()
            .filter_map(|keyword| {
                closest_word(keyword, &words, threshold).map(|word| fuzzy_label(keyword, word))
            })
            .collect()
    })
}
