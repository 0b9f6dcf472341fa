// Copyright 2025-present The cvsift Authors
// SPDX-License-Identifier: Apache-2.0

//! Memoized automata keyed by keyword set.
//!
//! Recruiters tend to rerun the same query with a different top-N or role
//! filter. Building the trie is cheap, but not free, and a built automaton is
//! immutable, so it is shared as `Arc<AhoCorasick>` across searches and
//! threads.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use super::AhoCorasick;

/// Bounded map from a canonical keyword set to its built automaton.
///
/// The key is the sorted, deduplicated keyword list, so `["go", "rust"]` and
/// `["rust", "go"]` share one automaton. When full, the map is cleared before
/// the next insert.
#[derive(Debug)]
pub struct AutomatonCache {
    entries: RwLock<HashMap<Vec<String>, Arc<AhoCorasick>>>,
    capacity: usize,
}

impl AutomatonCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            capacity,
        }
    }

    /// Return the automaton for `keywords`, building it on a miss.
    ///
    /// A zero capacity disables memoization.
    pub fn get_or_build(&self, keywords: &[String]) -> Arc<AhoCorasick> {
        let key = cache_key(keywords);

        if let Some(hit) = self.entries.read().get(&key) {
            tracing::trace!(keywords = key.len(), "automaton cache hit");
            return Arc::clone(hit);
        }

        let automaton = Arc::new(AhoCorasick::from_keywords(&key));
        if self.capacity == 0 {
            return automaton;
        }

        let mut entries = self.entries.write();
        if entries.len() >= self.capacity && !entries.contains_key(&key) {
            tracing::debug!(capacity = self.capacity, "automaton cache full, clearing");
            entries.clear();
        }
        // Another thread may have raced us here; keep whichever landed first
        Arc::clone(entries.entry(key).or_insert(automaton))
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    pub fn clear(&self) {
        self.entries.write().clear();
    }
}

impl Default for AutomatonCache {
    fn default() -> Self {
        Self::new(16)
    }
}

fn cache_key(keywords: &[String]) -> Vec<String> {
    let mut key: Vec<String> = keywords.iter().filter(|k| !k.is_empty()).cloned().collect();
    key.sort();
    key.dedup();
    key
}
