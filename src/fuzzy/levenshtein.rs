// Copyright 2025-present The cvsift Authors
// SPDX-License-Identifier: Apache-2.0

//! Edit distance: the similarity oracle behind the fuzzy fallback.
//!
//! `levenshtein_distance` is the textbook Wagner-Fischer table. It keeps the
//! whole `(m+1) x (n+1)` matrix because resume words are short and the table
//! doubles as documentation of the recurrence.
//!
//! `levenshtein_within` answers the cheaper question "at most `max` edits?".
//! `|len(a) - len(b)|` is a lower bound on edit distance, so most candidate
//! words are rejected before any allocation.

use crate::contracts::check_levenshtein_early_exit;

/// Levenshtein distance between `a` and `b`, ignoring case.
///
/// Counts single-character insertions, deletions and substitutions, measured
/// in Unicode scalar values. An empty side yields the length of the other.
///
/// ```
/// use cvsift::levenshtein_distance;
///
/// assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
/// assert_eq!(levenshtein_distance("Recipes", "recipis"), 1);
/// ```
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.to_lowercase().chars().collect();
    let b: Vec<char> = b.to_lowercase().chars().collect();
    let (m, n) = (a.len(), b.len());

    // dp[i][j] = distance between a[..i] and b[..j]
    let mut dp = vec![vec![0usize; n + 1]; m + 1];
    for (i, row) in dp.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=n {
        dp[0][j] = j;
    }

    for i in 1..=m {
        for j in 1..=n {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            dp[i][j] = (dp[i - 1][j] + 1) // deletion
                .min(dp[i][j - 1] + 1) // insertion
                .min(dp[i - 1][j - 1] + cost); // substitution
        }
    }

    dp[m][n]
}

/// Are these strings within `max` edits of each other?
///
/// Bounded Levenshtein with two early-exit paths:
/// 1. If the length difference exceeds `max`, return false immediately
/// 2. If the minimum of a DP row exceeds `max`, abandon the DP early
///
/// Both exits are sound: they never reject a pair whose distance is `<= max`.
/// Comparison is case-sensitive; callers pass normalized strings.
pub fn levenshtein_within(a: &str, b: &str, max: usize) -> bool {
    // Use character counts, not byte lengths, for Unicode correctness
    let a_len = a.chars().count();
    let b_len = b.chars().count();

    if a_len.abs_diff(b_len) > max {
        return false;
    }

    let mut dp: Vec<usize> = (0..=b_len).collect();
    for (i, ac) in a.chars().enumerate() {
        let mut prev = dp[0];
        dp[0] = i + 1;
        let mut min_row = dp[0];

        for (j, bc) in b.chars().enumerate() {
            let temp = dp[j + 1];
            let cost = if ac == bc { 0 } else { 1 };
            dp[j + 1] = (dp[j + 1] + 1).min(dp[j] + 1).min(prev + cost);
            prev = temp;
            min_row = min_row.min(dp[j + 1]);
        }

        if min_row > max {
            return false;
        }
    }

    let within = dp[b_len] <= max;
    check_levenshtein_early_exit(a, b, max, within);
    within
}
