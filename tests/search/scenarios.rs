//! End-to-end scenarios over in-memory documents.
//!
//! Each test is a small recruiting story: a handful of resumes, a query, and
//! the exact records the search must return.

use super::common::{assert_outcome_well_formed, make_docs, result_ids};
use cvsift::{boyer_moore_search, kmp_search, search_documents, Algorithm, SearchConfig};

// ============================================================================
// CLASSIC EXAMPLES
// ============================================================================

#[test]
fn test_textbook_pattern_for_both_matchers() {
    let text = "ABABDABACDABABCABAB";
    assert_eq!(kmp_search(text, "ABABCABAB"), vec![10]);
    assert_eq!(boyer_moore_search(text, "ABABCABAB"), vec![10]);
}

#[test]
fn test_cat_and_dog() {
    let docs = make_docs(&["cat cat dig"]);
    for algorithm in Algorithm::ALL {
        let outcome = search_documents(&docs, &["cat", "dog"], algorithm, 3, &SearchConfig::default()).unwrap();
        assert_eq!(outcome.results.len(), 1, "{}", algorithm);

        let record = &outcome.results[0];
        assert_eq!(record.matched_keywords.len(), 2);
        assert_eq!(record.matched_keywords["cat"], 2);
        assert_eq!(record.matched_keywords["dog (similar: dig)"], 1);
        assert_eq!(record.match_count, 2);
        assert!(outcome.fuzzy_phase_seconds >= 0.0);
        assert_outcome_well_formed(&outcome, 3);
    }
}

// ============================================================================
// RECRUITING QUERIES
// ============================================================================

#[test]
fn test_frontend_query_ranks_broadest_resume_first() {
    let docs = make_docs(&[
        "Frontend developer: React, HTML, CSS. React hooks and React Native.",
        "Backend engineer with Java and SQL",
        "Web designer. HTML and CSS, some JavaScript.",
        "Full stack: React, HTML, CSS, JavaScript, Node.js",
    ]);
    let keywords = ["react", "html", "css", "javascript"];

    let outcome = search_documents(&docs, &keywords, Algorithm::AhoCorasick, 3, &SearchConfig::default()).unwrap();
    assert_eq!(result_ids(&outcome.results), vec![4, 1, 3]);
    assert_eq!(outcome.results[1].matched_keywords["react"], 3);
    assert_eq!(outcome.results[0].match_count, 4);
    assert_outcome_well_formed(&outcome, 3);
}

#[test]
fn test_misspelled_query_keyword_falls_back_to_fuzzy() {
    let docs = make_docs(&["python developer", "java developer", "pyton scripts"]);
    let outcome = search_documents(&docs, &["pyhton"], Algorithm::Kmp, 5, &SearchConfig::default()).unwrap();

    assert_eq!(result_ids(&outcome.results), vec![1, 3]);
    assert_eq!(outcome.results[0].matched_keywords["pyhton (similar: python)"], 1);
    assert_eq!(outcome.results[1].matched_keywords["pyhton (similar: pyton)"], 1);
}

#[test]
fn test_misspelled_resume_word_found_by_fuzzy() {
    let docs = make_docs(&["experienced in javascipt and css", "css only"]);
    let outcome = search_documents(&docs, &["javascript", "css"], Algorithm::BoyerMoore, 5, &SearchConfig::default()).unwrap();

    assert_eq!(result_ids(&outcome.results), vec![1, 2]);
    assert_eq!(outcome.results[0].matched_keywords["css"], 1);
    assert_eq!(outcome.results[0].matched_keywords["javascript (similar: javascipt)"], 1);
}

#[test]
fn test_substring_hits_count() {
    // "sql" is found inside "mysql" and "postgresql"
    let docs = make_docs(&["mysql, postgresql and sql server"]);
    let outcome = search_documents(&docs, &["sql"], Algorithm::Kmp, 1, &SearchConfig::default()).unwrap();
    assert_eq!(outcome.results[0].matched_keywords["sql"], 3);
}

#[test]
fn test_multi_word_keyword() {
    let docs = make_docs(&["skilled in machine learning and machine vision"]);
    for algorithm in Algorithm::ALL {
        let outcome = search_documents(&docs, &["Machine  Learning"], algorithm, 1, &SearchConfig::default()).unwrap();
        assert_eq!(outcome.results[0].matched_keywords["machine learning"], 1);
    }
}

#[test]
fn test_accented_keywords_match_raw_text_verbatim() {
    // Documents are passed as written: mixed case, extra spaces, accents
    let docs = make_docs(&["Résumé of a  Café manager"]);
    for algorithm in Algorithm::ALL {
        let outcome = search_documents(&docs, &["résumé", "CAFÉ"], algorithm, 1, &SearchConfig::default()).unwrap();
        let record = &outcome.results[0];
        assert_eq!(record.matched_keywords["résumé"], 1, "{}", algorithm);
        assert_eq!(record.matched_keywords["café"], 1, "{}", algorithm);
        assert_eq!(record.fuzzy_hits().count(), 0);
    }
}

#[test]
fn test_unaccented_keyword_is_a_fuzzy_hit() {
    let docs = make_docs(&["Résumé writer"]);
    let outcome = search_documents(&docs, &["resume"], Algorithm::Kmp, 1, &SearchConfig::default()).unwrap();
    assert_eq!(outcome.results[0].matched_keywords["resume (similar: résumé)"], 1);
}

#[cfg(feature = "unicode-normalization")]
#[test]
fn test_decomposed_keyword_matches_precomposed_text() {
    let docs = make_docs(&["Café manager"]);
    let outcome = search_documents(&docs, &["cafe\u{301}"], Algorithm::AhoCorasick, 1, &SearchConfig::default()).unwrap();
    assert_eq!(outcome.results[0].matched_keywords["café"], 1);
}
