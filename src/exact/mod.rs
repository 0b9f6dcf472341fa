// Copyright 2025-present The cvsift Authors
// SPDX-License-Identifier: Apache-2.0

//! Single-pattern exact matching.
//!
//! Two classic algorithms behind one trait. Both precompute a table from the
//! pattern once and then scan any number of texts with it:
//!
//! - [`Kmp`]: longest-proper-prefix-suffix table, never moves backwards in
//!   the text. Predictable O(n + m).
//! - [`BoyerMoore`]: bad-character and good-suffix tables, compares right to
//!   left and skips ahead. Sublinear on long patterns over varied text.
//!
//! Positions are 0-based indices in Unicode scalar values, and overlapping
//! occurrences are all reported ("aa" occurs in "aaa" at 0 and 1). Both
//! matchers are case-sensitive; the orchestrator normalizes first.

mod boyer_moore;
mod kmp;

pub use boyer_moore::{boyer_moore_search, BoyerMoore, ShiftTable};
pub use kmp::{kmp_search, Kmp, LpsTable};

/// A preprocessed single pattern that can be scanned against many texts.
///
/// Implementors own their pattern-scoped tables; a matcher is built per
/// pattern and is never reused for another one.
pub trait PatternMatcher {
    /// The pattern this matcher was built for.
    fn pattern(&self) -> &[char];

    /// Start indices of every occurrence in `text`, ascending.
    ///
    /// An empty pattern matches nowhere.
    fn find_all(&self, text: &[char]) -> Vec<usize>;

    /// Number of (possibly overlapping) occurrences in `text`.
    fn count(&self, text: &[char]) -> usize {
        self.find_all(text).len()
    }
}
