//! Whole searches over random corpora.

use std::collections::HashSet;

use super::common::{assert_outcome_well_formed, make_docs, naive_find_all};
use super::{query_strategy, resume_strategy};
use cvsift::{fuzzy_label_keyword, search_documents, Algorithm, LoadedDocument, SearchConfig};
use proptest::prelude::*;

/// Brute-force count of documents with at least one exact or fuzzy hit.
///
/// Generated resumes are already lowercase and single-spaced, so the
/// keywords from the outcome can be compared against the raw text.
fn documents_with_hits(docs: &[LoadedDocument], keywords: &[String], threshold: usize) -> usize {
    let unmatched: Vec<&str> = keywords
        .iter()
        .map(String::as_str)
        .filter(|k| docs.iter().all(|d| naive_find_all(&d.text, k).is_empty()))
        .collect();

    docs.iter()
        .filter(|doc| {
            let exact = keywords.iter().any(|k| !naive_find_all(&doc.text, k).is_empty());
            let fuzzy = threshold > 0
                && unmatched.iter().any(|k| {
                    doc.text.split_whitespace().any(|w| {
                        let d = strsim::levenshtein(k, w);
                        d > 0 && d <= threshold
                    })
                });
            exact || fuzzy
        })
        .count()
}

fn algorithm_strategy() -> impl Strategy<Value = Algorithm> {
    prop::sample::select(Algorithm::ALL.to_vec())
}

proptest! {
    /// Property: every outcome satisfies the ranking invariants.
    #[test]
    fn prop_outcome_well_formed(
        resumes in prop::collection::vec(resume_strategy(), 0..8),
        keywords in query_strategy(),
        algorithm in algorithm_strategy(),
        top_n in 1usize..6,
    ) {
        let texts: Vec<&str> = resumes.iter().map(String::as_str).collect();
        let docs = make_docs(&texts);
        let outcome = search_documents(&docs, &keywords, algorithm, top_n, &SearchConfig::default()).unwrap();

        assert_outcome_well_formed(&outcome, top_n);
        let config = SearchConfig::default();
        let hit_docs = documents_with_hits(&docs, &outcome.keywords, config.fuzzy_threshold);
        prop_assert_eq!(outcome.results.len(), hit_docs.min(top_n));
        if !outcome.keywords.is_empty() {
            prop_assert_eq!(outcome.total_scanned, docs.len());
        }
    }

    /// Property: a keyword with an exact hit in any document never appears
    /// as a fuzzy label, even in documents where it did not occur.
    #[test]
    fn prop_fuzzy_only_for_globally_unmatched(
        resumes in prop::collection::vec(resume_strategy(), 1..8),
        keywords in query_strategy(),
        algorithm in algorithm_strategy(),
    ) {
        let texts: Vec<&str> = resumes.iter().map(String::as_str).collect();
        let docs = make_docs(&texts);
        let outcome = search_documents(&docs, &keywords, algorithm, 50, &SearchConfig::default()).unwrap();

        let exact_anywhere: HashSet<&str> = outcome.keywords.iter()
            .map(String::as_str)
            .filter(|k| docs.iter().any(|d| d.text.contains(*k)))
            .collect();
        for record in &outcome.results {
            for (label, count) in record.fuzzy_hits() {
                let keyword = fuzzy_label_keyword(label).unwrap_or(label);
                prop_assert!(!exact_anywhere.contains(keyword), "{} was matched exactly", keyword);
                prop_assert_eq!(count, 1);
            }
        }
    }

    /// Property: all three algorithms produce the same ranking.
    #[test]
    fn prop_algorithms_interchangeable(
        resumes in prop::collection::vec(resume_strategy(), 0..8),
        keywords in query_strategy(),
    ) {
        let texts: Vec<&str> = resumes.iter().map(String::as_str).collect();
        let docs = make_docs(&texts);
        let config = SearchConfig::default();

        let kmp = search_documents(&docs, &keywords, Algorithm::Kmp, 10, &config).unwrap();
        let bm = search_documents(&docs, &keywords, Algorithm::BoyerMoore, 10, &config).unwrap();
        let ac = search_documents(&docs, &keywords, Algorithm::AhoCorasick, 10, &config).unwrap();
        prop_assert_eq!(&kmp.results, &bm.results);
        prop_assert_eq!(&kmp.results, &ac.results);
    }
}
