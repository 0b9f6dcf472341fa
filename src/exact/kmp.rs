// Copyright 2025-present The cvsift Authors
// SPDX-License-Identifier: Apache-2.0

//! Knuth-Morris-Pratt.
//!
//! `lps[i]` is the length of the longest proper prefix of `pattern[..=i]`
//! that is also a suffix of it. On a mismatch after `j` matched characters
//! the scan resumes at `lps[j - 1]` instead of restarting, so the text
//! pointer only ever moves forward.

use super::PatternMatcher;
use crate::contracts::check_match_indices;

/// Longest-proper-prefix-suffix table for one pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LpsTable(Vec<usize>);

impl LpsTable {
    /// Build the table in O(m).
    pub fn build(pattern: &[char]) -> Self {
        let mut lps = vec![0; pattern.len()];
        let mut len = 0;
        let mut i = 1;

        while i < pattern.len() {
            if pattern[i] == pattern[len] {
                len += 1;
                lps[i] = len;
                i += 1;
            } else if len != 0 {
                len = lps[len - 1];
            } else {
                lps[i] = 0;
                i += 1;
            }
        }

        LpsTable(lps)
    }

    #[inline]
    pub fn get(&self, i: usize) -> usize {
        self.0[i]
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }
}

/// A KMP matcher for one pattern.
#[derive(Debug, Clone)]
pub struct Kmp {
    pattern: Vec<char>,
    lps: LpsTable,
}

impl Kmp {
    pub fn new(pattern: &str) -> Self {
        let pattern: Vec<char> = pattern.chars().collect();
        let lps = LpsTable::build(&pattern);
        Self { pattern, lps }
    }

    pub fn lps(&self) -> &LpsTable {
        &self.lps
    }
}

impl PatternMatcher for Kmp {
    fn pattern(&self) -> &[char] {
        &self.pattern
    }

    fn find_all(&self, text: &[char]) -> Vec<usize> {
        let m = self.pattern.len();
        let mut indices = Vec::new();
        if m == 0 {
            return indices;
        }

        let mut j = 0;
        for (i, &c) in text.iter().enumerate() {
            while j > 0 && c != self.pattern[j] {
                j = self.lps.get(j - 1);
            }
            if c == self.pattern[j] {
                j += 1;
            }
            if j == m {
                indices.push(i + 1 - m);
                // Treat the full match as a mismatch past the end so overlaps survive
                j = self.lps.get(j - 1);
            }
        }

        check_match_indices(text, &self.pattern, &indices);
        indices
    }
}

/// All start indices of `pattern` in `text` using KMP.
///
/// ```
/// use cvsift::kmp_search;
///
/// assert_eq!(kmp_search("ABABDABACDABABCABAB", "ABABCABAB"), vec![10]);
/// assert_eq!(kmp_search("aaaa", "aa"), vec![0, 1, 2]);
/// assert!(kmp_search("anything", "").is_empty());
/// ```
pub fn kmp_search(text: &str, pattern: &str) -> Vec<usize> {
    let text: Vec<char> = text.chars().collect();
    Kmp::new(pattern).find_all(&text)
}
