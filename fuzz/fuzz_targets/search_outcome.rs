// Copyright 2025-present The cvsift Authors
// SPDX-License-Identifier: Apache-2.0

//! Whole searches over arbitrary documents and keywords: never panic, and
//! the ranked outcome always satisfies its invariants.

#![no_main]

use arbitrary::Arbitrary;
use cvsift::testing::make_doc;
use cvsift::{normalize, search_documents, Algorithm, SearchConfig};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct SearchInput {
    documents: Vec<String>,
    keywords: Vec<String>,
    algorithm: u8,
    top_n: u8,
}

fuzz_target!(|input: SearchInput| {
    let docs: Vec<_> = input
        .documents
        .iter()
        .take(8)
        .enumerate()
        .map(|(i, text)| make_doc(i as u64 + 1, &normalize(&text.chars().take(200).collect::<String>())))
        .collect();
    let keywords: Vec<String> = input.keywords.iter().take(6).map(|k| k.chars().take(12).collect()).collect();
    let algorithm = Algorithm::ALL[usize::from(input.algorithm) % Algorithm::ALL.len()];
    let config = SearchConfig {
        parallel: false,
        ..SearchConfig::default()
    };

    let outcome = match search_documents(&docs, &keywords, algorithm, usize::from(input.top_n), &config) {
        Ok(outcome) => outcome,
        Err(_) => {
            assert_eq!(input.top_n, 0, "only a zero top-N is rejected");
            return;
        }
    };

    assert!(outcome.results.len() <= usize::from(input.top_n));
    for record in &outcome.results {
        assert_eq!(record.match_count, record.matched_keywords.len());
        assert!(record.match_count > 0);
    }
    for pair in outcome.results.windows(2) {
        assert!(pair[0].match_count >= pair[1].match_count);
    }
});
