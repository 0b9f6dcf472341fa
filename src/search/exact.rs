// Copyright 2025-present The cvsift Authors
// SPDX-License-Identifier: Apache-2.0

//! Phase 1: exact occurrences of every keyword in every document.
//!
//! With Aho-Corasick each document is walked once for the whole keyword set.
//! With KMP or Boyer-Moore one matcher is built per keyword up front and each
//! (document, keyword) pair is scanned separately.

use std::sync::Arc;

use crate::automaton::{AhoCorasick, AutomatonCache};
use crate::exact::{BoyerMoore, Kmp, PatternMatcher};
use crate::types::{Algorithm, LoadedDocument, MatchRecord};

use super::map_documents;

enum Strategy {
    Single(Vec<(String, Box<dyn PatternMatcher + Send + Sync>)>),
    Multi(Arc<AhoCorasick>),
}

impl Strategy {
    fn prepare(keywords: &[String], algorithm: Algorithm, cache: &AutomatonCache) -> Self {
        match algorithm {
            Algorithm::Kmp => Strategy::Single(
                keywords
                    .iter()
                    .map(|k| (k.clone(), Box::new(Kmp::new(k)) as Box<dyn PatternMatcher + Send + Sync>))
                    .collect(),
            ),
            Algorithm::BoyerMoore => Strategy::Single(
                keywords
                    .iter()
                    .map(|k| {
                        (k.clone(), Box::new(BoyerMoore::new(k)) as Box<dyn PatternMatcher + Send + Sync>)
                    })
                    .collect(),
            ),
            Algorithm::AhoCorasick => Strategy::Multi(cache.get_or_build(keywords)),
        }
    }

    /// Non-zero occurrence counts for one document, as `(keyword, count)`.
    fn counts(&self, text: &str) -> Vec<(String, usize)> {
        match self {
            Strategy::Single(matchers) => {
                let chars: Vec<char> = text.chars().collect();
                matchers
                    .iter()
                    .map(|(keyword, matcher)| (keyword.clone(), matcher.count(&chars)))
                    .filter(|&(_, count)| count > 0)
                    .collect()
            }
            Strategy::Multi(automaton) => automaton
                .count_matches(text)
                .into_iter()
                .enumerate()
                .filter(|&(_, count)| count > 0)
                .map(|(id, count)| (automaton.keywords()[id].clone(), count))
                .collect(),
        }
    }
}

/// Run the exact phase.
///
/// Returns one slot per document, `Some` when the document had at least one
/// exact hit.
pub(crate) fn exact_phase(
    documents: &[LoadedDocument],
    keywords: &[String],
    algorithm: Algorithm,
    cache: &AutomatonCache,
    parallel: bool,
) -> Vec<Option<MatchRecord>> {
    let strategy = Strategy::prepare(keywords, algorithm, cache);

    map_documents(documents, parallel, |doc| {
        let counts = strategy.counts(&doc.text);
        if counts.is_empty() {
            return None;
        }
        let mut record = MatchRecord::new(&doc.entry);
        for (keyword, count) in counts {
            record.record(keyword, count);
        }
        Some(record)
    })
}
