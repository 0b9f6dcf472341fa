//! Edit distance against `strsim`, plus the metric laws.

use super::word_strategy;
use cvsift::{levenshtein_distance, levenshtein_within};
use proptest::prelude::*;

proptest! {
    /// Property: distance equals the reference implementation.
    #[test]
    fn prop_distance_matches_strsim(a in word_strategy(), b in word_strategy()) {
        prop_assert_eq!(levenshtein_distance(&a, &b), strsim::levenshtein(&a, &b));
    }

    /// Property: distance ignores case.
    #[test]
    fn prop_distance_case_insensitive(a in word_strategy(), b in word_strategy()) {
        prop_assert_eq!(levenshtein_distance(&a.to_uppercase(), &b), levenshtein_distance(&a, &b));
    }

    /// Property: d(a, b) == d(b, a), and d(a, a) == 0.
    #[test]
    fn prop_symmetric_and_reflexive(a in word_strategy(), b in word_strategy()) {
        prop_assert_eq!(levenshtein_distance(&a, &b), levenshtein_distance(&b, &a));
        prop_assert_eq!(levenshtein_distance(&a, &a), 0);
    }

    /// Property: d(a, c) <= d(a, b) + d(b, c).
    #[test]
    fn prop_triangle_inequality(a in word_strategy(), b in word_strategy(), c in word_strategy()) {
        let ac = levenshtein_distance(&a, &c);
        let ab = levenshtein_distance(&a, &b);
        let bc = levenshtein_distance(&b, &c);
        prop_assert!(ac <= ab + bc, "d({a},{c})={ac} > {ab} + {bc}");
    }

    /// Property: the bounded check agrees with the full distance for every
    /// threshold, including the early exits.
    #[test]
    fn prop_within_agrees_with_distance(a in word_strategy(), b in word_strategy(), max in 0usize..5) {
        let expected = strsim::levenshtein(&a, &b) <= max;
        prop_assert_eq!(levenshtein_within(&a, &b, max), expected);
    }

    /// Property: the distance is bounded by the longer length.
    #[test]
    fn prop_distance_bounded(a in word_strategy(), b in word_strategy()) {
        let d = levenshtein_distance(&a, &b);
        prop_assert!(d <= a.chars().count().max(b.chars().count()));
        prop_assert!(d >= a.chars().count().abs_diff(b.chars().count()));
    }
}
