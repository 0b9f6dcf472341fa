//! Same input, same output: across runs, algorithms and thread counts.

use cvsift::testing::synthetic_corpus;
use cvsift::{search_documents, Algorithm, SearchConfig};

fn sequential() -> SearchConfig {
    SearchConfig {
        parallel: false,
        ..SearchConfig::default()
    }
}

#[test]
fn test_repeated_runs_identical() {
    let docs = synthetic_corpus(40, 120);
    let keywords = ["python", "react", "kubernetes", "pyhton", "figmaa"];
    let first = search_documents(&docs, &keywords, Algorithm::AhoCorasick, 20, &SearchConfig::default()).unwrap();
    for _ in 0..5 {
        let again = search_documents(&docs, &keywords, Algorithm::AhoCorasick, 20, &SearchConfig::default()).unwrap();
        assert_eq!(first.results, again.results);
    }
}

#[test]
fn test_algorithms_agree_on_synthetic_corpus() {
    let docs = synthetic_corpus(30, 200);
    let keywords = ["sql", "mysql", "java", "javascript", "leadership", "rustacean"];
    let reference = search_documents(&docs, &keywords, Algorithm::Kmp, 30, &sequential()).unwrap();
    for algorithm in [Algorithm::BoyerMoore, Algorithm::AhoCorasick] {
        let other = search_documents(&docs, &keywords, algorithm, 30, &sequential()).unwrap();
        assert_eq!(reference.results, other.results, "{} disagrees with KMP", algorithm);
    }
}

#[test]
fn test_parallel_agrees_with_sequential() {
    let docs = synthetic_corpus(64, 150);
    let keywords = ["docker", "excel", "photoshopp", "accountin"];
    for algorithm in Algorithm::ALL {
        let a = search_documents(&docs, &keywords, algorithm, 50, &sequential()).unwrap();
        let b = search_documents(&docs, &keywords, algorithm, 50, &SearchConfig::default()).unwrap();
        assert_eq!(a.results, b.results);
        assert_eq!(a.total_scanned, b.total_scanned);
    }
}
