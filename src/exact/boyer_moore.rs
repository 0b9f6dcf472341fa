// Copyright 2025-present The cvsift Authors
// SPDX-License-Identifier: Apache-2.0

//! Boyer-Moore with both heuristics.
//!
//! Each alignment is compared right to left. On a mismatch two independent
//! rules propose a shift and the larger one wins:
//!
//! - **Bad character**: slide so the mismatched text character lines up with
//!   its last occurrence in the pattern (or past it, if it never occurs).
//! - **Good suffix**: slide so the already-matched suffix lines up with its
//!   next occurrence in the pattern, or with the longest pattern prefix that
//!   is also a suffix of it.
//!
//! After a full match the alignment moves by `good_suffix[0]`, the pattern's
//! period, which keeps overlapping occurrences reachable.

use std::collections::HashMap;

use super::PatternMatcher;
use crate::contracts::check_match_indices;

/// Pattern-scoped shift tables.
#[derive(Debug, Clone)]
pub struct ShiftTable {
    /// Last index of each character in the pattern.
    bad_char: HashMap<char, usize>,
    /// `good_suffix[j]` is the shift when `pattern[j..]` matched and
    /// `pattern[j - 1]` did not. `good_suffix[0]` is the shift after a full match.
    good_suffix: Vec<usize>,
}

impl ShiftTable {
    pub fn build(pattern: &[char]) -> Self {
        Self {
            bad_char: build_bad_char(pattern),
            good_suffix: build_good_suffix(pattern),
        }
    }

    /// Last index of `c` in the pattern, if it occurs.
    #[inline]
    pub fn last_occurrence(&self, c: char) -> Option<usize> {
        self.bad_char.get(&c).copied()
    }

    #[inline]
    pub fn good_suffix(&self, j: usize) -> usize {
        self.good_suffix[j]
    }

    /// Shift after mismatching at pattern offset `j` against text char `c`.
    ///
    /// Never less than 1.
    pub fn mismatch_shift(&self, j: usize, c: char) -> usize {
        // Bad-character shift may be zero or negative when `c` occurs to the right of j
        let bad = match self.last_occurrence(c) {
            Some(last) => j as isize - last as isize,
            None => j as isize + 1,
        };
        let good = self.good_suffix[j + 1] as isize;
        bad.max(good).max(1) as usize
    }
}

fn build_bad_char(pattern: &[char]) -> HashMap<char, usize> {
    pattern.iter().enumerate().map(|(i, &c)| (c, i)).collect()
}

/// Strong good-suffix table via the two-case border computation.
///
/// `border[i]` is the start of the widest border of `pattern[i..]`.
/// Case 1 fills shifts where the matched suffix reoccurs preceded by a
/// different character; case 2 fills the rest from the widest border of
/// the whole pattern.
fn build_good_suffix(pattern: &[char]) -> Vec<usize> {
    let m = pattern.len();
    let mut shift = vec![0usize; m + 1];
    let mut border = vec![0usize; m + 1];

    // Case 1: matched suffix occurs elsewhere in the pattern
    let mut i = m;
    let mut j = m + 1;
    border[i] = j;
    while i > 0 {
        while j <= m && pattern[i - 1] != pattern[j - 1] {
            if shift[j] == 0 {
                shift[j] = j - i;
            }
            j = border[j];
        }
        i -= 1;
        j -= 1;
        border[i] = j;
    }

    // Case 2: only a prefix of the pattern matches part of the suffix
    let mut j = border[0];
    for i in 0..=m {
        if shift[i] == 0 {
            shift[i] = j;
        }
        if i == j {
            j = border[j];
        }
    }

    shift
}

/// A Boyer-Moore matcher for one pattern.
#[derive(Debug, Clone)]
pub struct BoyerMoore {
    pattern: Vec<char>,
    table: ShiftTable,
}

impl BoyerMoore {
    pub fn new(pattern: &str) -> Self {
        let pattern: Vec<char> = pattern.chars().collect();
        let table = ShiftTable::build(&pattern);
        Self { pattern, table }
    }

    pub fn table(&self) -> &ShiftTable {
        &self.table
    }
}

impl PatternMatcher for BoyerMoore {
    fn pattern(&self) -> &[char] {
        &self.pattern
    }

    fn find_all(&self, text: &[char]) -> Vec<usize> {
        let m = self.pattern.len();
        let n = text.len();
        let mut indices = Vec::new();
        if m == 0 || m > n {
            return indices;
        }

        let mut s = 0;
        while s + m <= n {
            // `j` counts the characters still unmatched; compare pattern[j - 1]
            let mut j = m;
            while j > 0 && self.pattern[j - 1] == text[s + j - 1] {
                j -= 1;
            }

            if j == 0 {
                indices.push(s);
                s += self.table.good_suffix(0);
            } else {
                s += self.table.mismatch_shift(j - 1, text[s + j - 1]);
            }
        }

        check_match_indices(text, &self.pattern, &indices);
        indices
    }
}

/// All start indices of `pattern` in `text` using Boyer-Moore.
///
/// ```
/// use cvsift::boyer_moore_search;
///
/// assert_eq!(boyer_moore_search("ABABDABACDABABCABAB", "ABABCABAB"), vec![10]);
/// assert_eq!(boyer_moore_search("aaaa", "aa"), vec![0, 1, 2]);
/// ```
pub fn boyer_moore_search(text: &str, pattern: &str) -> Vec<usize> {
    let text: Vec<char> = text.chars().collect();
    BoyerMoore::new(pattern).find_all(&text)
}
