//! KMP, Boyer-Moore and Aho-Corasick against a brute-force scan.

use super::common::naive_find_all;
use super::{small_alphabet_pattern, small_alphabet_text, unicode_word_strategy};
use cvsift::{boyer_moore_search, kmp_search, AhoCorasick};
use proptest::prelude::*;

proptest! {
    /// Property: KMP reports exactly the brute-force positions.
    #[test]
    fn prop_kmp_matches_naive(text in small_alphabet_text(), pattern in small_alphabet_pattern()) {
        prop_assert_eq!(kmp_search(&text, &pattern), naive_find_all(&text, &pattern));
    }

    /// Property: Boyer-Moore reports exactly the brute-force positions.
    #[test]
    fn prop_boyer_moore_matches_naive(text in small_alphabet_text(), pattern in small_alphabet_pattern()) {
        prop_assert_eq!(boyer_moore_search(&text, &pattern), naive_find_all(&text, &pattern));
    }

    /// Property: positions are char indices, also for multi-byte text.
    #[test]
    fn prop_matchers_agree_on_unicode(
        words in prop::collection::vec(unicode_word_strategy(), 0..8),
        pattern in unicode_word_strategy(),
    ) {
        let text = words.join(" ");
        let expected = naive_find_all(&text, &pattern);
        prop_assert_eq!(kmp_search(&text, &pattern), expected.clone());
        prop_assert_eq!(boyer_moore_search(&text, &pattern), expected);
    }

    /// Property: every Aho-Corasick end index is a KMP start index shifted
    /// by the keyword length, and nothing is missed.
    #[test]
    fn prop_aho_corasick_matches_kmp(
        text in small_alphabet_text(),
        keywords in prop::collection::vec(small_alphabet_pattern(), 1..5),
    ) {
        let ac = AhoCorasick::from_keywords(&keywords);
        let hits = ac.search(&text);
        let counts = ac.count_matches(&text);

        for (id, keyword) in ac.keywords().iter().enumerate() {
            let len = keyword.chars().count();
            let expected: Vec<usize> = kmp_search(&text, keyword).into_iter().map(|s| s + len - 1).collect();
            let found = hits.get(keyword).cloned().unwrap_or_default();
            prop_assert_eq!(&found, &expected, "keyword {:?}", keyword);
            prop_assert_eq!(counts[id], expected.len());
        }
    }

    /// Property: the built automaton is well formed (failure links point at
    /// strictly shallower nodes).
    #[test]
    fn prop_failure_links_shallower(keywords in prop::collection::vec(small_alphabet_pattern(), 1..6)) {
        let ac = AhoCorasick::from_keywords(&keywords);
        for node in ac.nodes().iter().skip(1) {
            prop_assert!(ac.nodes()[node.fail()].depth() < node.depth());
        }
    }
}
