// Copyright 2025-present The cvsift Authors
// SPDX-License-Identifier: Apache-2.0

//! One Aho-Corasick pass must count exactly what KMP counts keyword by
//! keyword, and end indices must line up with KMP start indices.

#![no_main]

use arbitrary::Arbitrary;
use cvsift::{kmp_search, AhoCorasick};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct AutomatonInput {
    text: String,
    keywords: Vec<String>,
}

fuzz_target!(|input: AutomatonInput| {
    let text: String = input.text.chars().take(500).collect();
    let keywords: Vec<String> = input
        .keywords
        .iter()
        .take(16)
        .map(|k| k.chars().take(12).collect())
        .collect();

    let ac = AhoCorasick::from_keywords(&keywords);
    let counts = ac.count_matches(&text);
    let hits = ac.search(&text);

    for (id, keyword) in ac.keywords().iter().enumerate() {
        let starts = kmp_search(&text, keyword);
        assert_eq!(counts[id], starts.len(), "count mismatch for {:?}", keyword);

        let len = keyword.chars().count();
        let ends: Vec<usize> = starts.iter().map(|s| s + len - 1).collect();
        assert_eq!(hits.get(keyword).cloned().unwrap_or_default(), ends);
    }

    // Empty keywords never enter the automaton
    assert!(ac.keywords().iter().all(|k| !k.is_empty()));
});
