// Copyright 2025-present The cvsift Authors
// SPDX-License-Identifier: Apache-2.0

//! Edit distance must behave like a metric, and the bounded check must
//! never disagree with the full computation.

#![no_main]

use arbitrary::Arbitrary;
use cvsift::{levenshtein_distance, levenshtein_within};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct DistanceInput {
    a: String,
    b: String,
    c: String,
    max: u8,
}

fuzz_target!(|input: DistanceInput| {
    let a: String = input.a.chars().take(40).collect::<String>().to_lowercase();
    let b: String = input.b.chars().take(40).collect::<String>().to_lowercase();
    let c: String = input.c.chars().take(40).collect::<String>().to_lowercase();
    let max = usize::from(input.max % 8);

    let ab = levenshtein_distance(&a, &b);
    assert_eq!(ab, levenshtein_distance(&b, &a), "not symmetric");
    assert_eq!(levenshtein_distance(&a, &a), 0);

    let ac = levenshtein_distance(&a, &c);
    let bc = levenshtein_distance(&b, &c);
    assert!(ac <= ab + bc, "triangle inequality violated");

    // Lowercasing can change lengths, so compare on the lowercased forms
    assert_eq!(levenshtein_within(&a, &b, max), levenshtein_distance(&a, &b) <= max);
});
