// Copyright 2025-present The cvsift Authors
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: typo tolerance via edit distance.
//!
//! A full-matrix distance for the fuzzy phase's final verdict, and a bounded
//! check that rejects hopeless candidates before the matrix is built.

mod levenshtein;

pub use levenshtein::*;
