//! Ranking: distinct keywords first, ties in encounter order.

use super::common::{make_docs, result_ids};
use cvsift::{search_documents, Algorithm, SearchConfig};

#[test]
fn test_breadth_beats_repetition() {
    let docs = make_docs(&["java java java java java", "java sql"]);
    let outcome = search_documents(&docs, &["java", "sql"], Algorithm::Kmp, 2, &SearchConfig::default()).unwrap();
    assert_eq!(result_ids(&outcome.results), vec![2, 1]);
}

#[test]
fn test_ties_keep_document_order() {
    let docs = make_docs(&["sql", "rust", "sql", "rust"]);
    for algorithm in Algorithm::ALL {
        let outcome = search_documents(&docs, &["rust", "sql"], algorithm, 4, &SearchConfig::default()).unwrap();
        assert_eq!(result_ids(&outcome.results), vec![1, 2, 3, 4], "{}", algorithm);
    }
}

#[test]
fn test_fuzzy_hit_counts_as_a_keyword() {
    // doc 2 gets "sql" exactly and "kotlin" fuzzily, beating doc 1's single exact hit
    let docs = make_docs(&["sql", "sql kotlinn"]);
    let outcome = search_documents(&docs, &["sql", "kotlin"], Algorithm::AhoCorasick, 2, &SearchConfig::default()).unwrap();
    assert_eq!(result_ids(&outcome.results), vec![2, 1]);
    assert_eq!(outcome.results[0].matched_keywords["kotlin (similar: kotlinn)"], 1);
}

#[test]
fn test_fuzzy_only_records_rank_after_equal_exact_records() {
    let docs = make_docs(&["golang", "rust"]);
    let outcome = search_documents(&docs, &["rust", "golan"], Algorithm::Kmp, 2, &SearchConfig::default()).unwrap();
    // "golan" is a substring of "golang", so it matches exactly; no fuzzy here
    assert_eq!(result_ids(&outcome.results), vec![1, 2]);

    let docs = make_docs(&["goland", "rust"]);
    let outcome = search_documents(&docs, &["rust", "golang"], Algorithm::Kmp, 2, &SearchConfig::default()).unwrap();
    assert_eq!(result_ids(&outcome.results), vec![2, 1]);
}

#[test]
fn test_truncation_keeps_the_best() {
    let docs = make_docs(&["a1", "a1 b2", "a1 b2 c3", "b2"]);
    let outcome = search_documents(&docs, &["a1", "b2", "c3"], Algorithm::BoyerMoore, 2, &SearchConfig::default()).unwrap();
    assert_eq!(result_ids(&outcome.results), vec![3, 2]);
}
