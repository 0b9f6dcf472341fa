// Copyright 2025-present The cvsift Authors
// SPDX-License-Identifier: Apache-2.0

//! KMP and Boyer-Moore must report the same occurrences as a brute-force
//! scan, for any text and pattern, including multi-byte ones.

#![no_main]

use arbitrary::Arbitrary;
use cvsift::testing::naive_find_all;
use cvsift::{boyer_moore_search, kmp_search};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct MatchInput {
    text: String,
    pattern: String,
}

fuzz_target!(|input: MatchInput| {
    // Cap lengths to avoid timeouts in the brute-force oracle
    let text: String = input.text.chars().take(500).collect();
    let pattern: String = input.pattern.chars().take(16).collect();

    let expected = naive_find_all(&text, &pattern);
    assert_eq!(kmp_search(&text, &pattern), expected, "KMP disagrees for {:?}", pattern);
    assert_eq!(boyer_moore_search(&text, &pattern), expected, "Boyer-Moore disagrees for {:?}", pattern);
});
