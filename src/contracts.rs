// Copyright 2025-present The cvsift Authors
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the matching engine.
//!
//! Debug-mode assertions over the structures the search builds. They are
//! **zero-cost in release builds** (`debug_assert!`) and fail early during
//! development and in the test suites.
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function              | Property                                       |
//! |--------------------------------|------------------------------------------------|
//! | `check_automaton_well_formed`  | failure links shallower, outputs closed        |
//! | `check_match_indices`          | every reported index is a real occurrence      |
//! | `check_record_counts`          | `match_count == matched_keywords.len()`        |
//! | `check_sorted_by_match_count`  | results non-increasing by `match_count`        |
//! | `check_fuzzy_excludes_exact`   | no fuzzy entry for a keyword with exact hits   |
//! | `check_levenshtein_early_exit` | `within == true` implies length gap `<= max`   |

use std::collections::HashSet;

use crate::automaton::{AhoCorasick, ROOT};
use crate::types::{fuzzy_label_keyword, MatchRecord};

// ============================================================================
// AUTOMATON CONTRACTS
// ============================================================================

/// Check a built automaton's structure.
///
/// - root fails to itself
/// - every other node fails to a strictly shallower node (so the failure
///   graph is a tree rooted at 0)
/// - `outputs(v) ⊇ outputs(fail(v))`
/// - every child sits exactly one level below its parent, and no node is the
///   child of two parents
///
/// # Panics (debug builds only)
#[inline]
pub fn check_automaton_well_formed(automaton: &AhoCorasick) {
    if !cfg!(debug_assertions) {
        return;
    }

    let nodes = automaton.nodes();
    debug_assert!(
        nodes[ROOT].fail() == ROOT,
        "Contract violation: root failure link points at {}",
        nodes[ROOT].fail()
    );

    let mut seen_children = HashSet::new();
    for (id, node) in nodes.iter().enumerate() {
        for &child in node.children.values() {
            debug_assert!(
                seen_children.insert(child),
                "Contract violation: node {} has more than one parent",
                child
            );
            debug_assert!(
                nodes[child].depth() == node.depth() + 1,
                "Contract violation: child {} of node {} has depth {} (expected {})",
                child,
                id,
                nodes[child].depth(),
                node.depth() + 1
            );
        }

        if id == ROOT {
            continue;
        }

        let fail = node.fail();
        debug_assert!(
            nodes[fail].depth() < node.depth(),
            "Contract violation: failure link {} -> {} does not decrease depth ({} >= {})",
            id,
            fail,
            nodes[fail].depth(),
            node.depth()
        );
        for keyword in nodes[fail].outputs() {
            debug_assert!(
                node.outputs().contains(keyword),
                "Contract violation: node {} is missing output {} inherited from {}",
                id,
                keyword,
                fail
            );
        }
    }

    for (id, keyword) in automaton.keywords().iter().enumerate() {
        debug_assert!(
            !keyword.is_empty(),
            "Contract violation: keyword {} is empty",
            id
        );
    }
}

// ============================================================================
// MATCHER CONTRACTS
// ============================================================================

/// Check that every reported start index is an occurrence and that the list
/// is strictly ascending.
#[inline]
pub fn check_match_indices(text: &[char], pattern: &[char], indices: &[usize]) {
    if !cfg!(debug_assertions) {
        return;
    }
    for window in indices.windows(2) {
        debug_assert!(
            window[0] < window[1],
            "Contract violation: match indices not ascending ({} then {})",
            window[0],
            window[1]
        );
    }
    for &start in indices {
        debug_assert!(
            text.get(start..start + pattern.len()) == Some(pattern),
            "Contract violation: reported match at {} is not an occurrence",
            start
        );
    }
}

// ============================================================================
// RECORD CONTRACTS
// ============================================================================

/// `match_count` must equal the number of distinct keys.
#[inline]
pub fn check_record_counts(records: &[MatchRecord]) {
    for record in records {
        debug_assert!(
            record.match_count == record.matched_keywords.len(),
            "Contract violation: document {} has match_count {} but {} keys",
            record.document_id,
            record.match_count,
            record.matched_keywords.len()
        );
        debug_assert!(
            record.match_count > 0,
            "Contract violation: document {} was recorded without a hit",
            record.document_id
        );
    }
}

/// Results must be non-increasing by `match_count`.
#[inline]
pub fn check_sorted_by_match_count(records: &[MatchRecord]) {
    for window in records.windows(2) {
        debug_assert!(
            window[0].match_count >= window[1].match_count,
            "Contract violation: result for document {} ({}) ranked above document {} ({})",
            window[0].document_id,
            window[0].match_count,
            window[1].document_id,
            window[1].match_count
        );
    }
}

/// A keyword with an exact hit anywhere must never appear in a fuzzy label.
#[inline]
pub fn check_fuzzy_excludes_exact(records: &[MatchRecord], exact_hit_keywords: &HashSet<String>) {
    if !cfg!(debug_assertions) {
        return;
    }
    for record in records {
        for label in record.matched_keywords.keys() {
            if let Some(keyword) = fuzzy_label_keyword(label) {
                debug_assert!(
                    !exact_hit_keywords.contains(keyword),
                    "Contract violation: '{}' has exact hits but document {} carries fuzzy label '{}'",
                    keyword,
                    record.document_id,
                    label
                );
            }
        }
    }
}

// ============================================================================
// LEVENSHTEIN CONTRACTS
// ============================================================================

/// If `levenshtein_within(a, b, max)` returned true, the char-length gap is
/// at most `max`.
#[inline]
pub fn check_levenshtein_early_exit(a: &str, b: &str, max: usize, result: bool) {
    if result {
        let len_diff = a.chars().count().abs_diff(b.chars().count());
        debug_assert!(
            len_diff <= max,
            "Contract violation: levenshtein_within returned true but \
             |len('{}') - len('{}')| = {} > max = {}",
            a.chars().take(10).collect::<String>(),
            b.chars().take(10).collect::<String>(),
            len_diff,
            max
        );
    }
}
