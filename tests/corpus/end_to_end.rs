//! Full searches over files on disk.

use std::fs;

use super::common::{assert_outcome_well_formed, write_corpus};
use cvsift::{
    Algorithm, ConfigError, DirectoryCorpus, ManifestCorpus, Orchestrator, PlainTextExtractor, SearchConfig,
    SearchError, SearchRequest,
};

#[test]
fn test_directory_search_with_unreadable_document() {
    let dir = tempfile::tempdir().unwrap();
    write_corpus(
        dir.path(),
        &[
            ("Designer", "eka.txt", "Figma, Photoshop and CSS"),
            ("IT", "dewi.txt", "Senior Python developer. SQL, Docker."),
            ("IT", "fajar.txt", "Java and SQL"),
        ],
    )
    .unwrap();
    fs::write(dir.path().join("IT").join("scan.pdf"), [0x25u8, 0x50, 0x44, 0x46, 0xff, 0xfe]).unwrap();

    let orchestrator = Orchestrator::new(DirectoryCorpus::new(dir.path()), PlainTextExtractor, SearchConfig::default()).unwrap();
    let outcome = orchestrator
        .search(&SearchRequest::new(["SQL", "pyhton", "css"], Algorithm::BoyerMoore, 3))
        .unwrap();

    assert_eq!(outcome.total_scanned, 3);
    assert_eq!(outcome.failed_documents.len(), 1);
    assert_eq!(outcome.failed_documents[0].entry.display_name, "scan");

    assert_eq!(outcome.results[0].display_name, "dewi");
    assert_eq!(outcome.results[0].matched_keywords["sql"], 1);
    assert_eq!(outcome.results[0].matched_keywords["pyhton (similar: python)"], 1);
    assert_outcome_well_formed(&outcome, 3);
}

#[test]
fn test_manifest_search_with_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    write_corpus(dir.path(), &[("hr", "ana.txt", "Payroll and recruiting")]).unwrap();
    let manifest = dir.path().join("applicants.json");
    fs::write(
        &manifest,
        r#"{"version": 1, "documents": [
            {"id": 1, "name": "Ana", "path": "hr/ana.txt", "category": "HR"},
            {"id": 2, "name": "Ghost", "path": "hr/ghost.txt", "category": "HR"}
        ]}"#,
    )
    .unwrap();

    let corpus = ManifestCorpus::load(&manifest).unwrap();
    let orchestrator = Orchestrator::new(corpus, PlainTextExtractor, SearchConfig::default()).unwrap();
    let outcome = orchestrator
        .search(&SearchRequest::new(["payroll"], Algorithm::AhoCorasick, 3))
        .unwrap();

    assert_eq!(outcome.results.len(), 1);
    assert_eq!(outcome.results[0].document_id, 1);
    assert_eq!(outcome.failed_documents.len(), 1);
    assert!(outcome.failed_documents[0].reason.contains("not found"));
}

#[test]
fn test_missing_corpus_aborts() {
    let dir = tempfile::tempdir().unwrap();
    let orchestrator =
        Orchestrator::new(DirectoryCorpus::new(dir.path().join("gone")), PlainTextExtractor, SearchConfig::default())
            .unwrap();
    let result = orchestrator.search(&SearchRequest::new(["rust"], Algorithm::Kmp, 3));
    assert!(matches!(result, Err(SearchError::Corpus(_))));
}

#[test]
fn test_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cvsift.json");

    fs::write(&path, r#"{"fuzzy_threshold": 1, "max_top_n": 5}"#).unwrap();
    let config = SearchConfig::from_json_file(&path).unwrap();
    assert_eq!(config.fuzzy_threshold, 1);
    assert_eq!(config.max_top_n, Some(5));
    assert_eq!(config.automaton_cache_capacity, SearchConfig::default().automaton_cache_capacity);

    fs::write(&path, r#"{"fuzzy_treshold": 1}"#).unwrap();
    assert!(matches!(SearchConfig::from_json_file(&path), Err(ConfigError::Parse { .. })));

    fs::write(&path, r#"{"max_top_n": 0}"#).unwrap();
    assert!(matches!(SearchConfig::from_json_file(&path), Err(ConfigError::OutOfRange { .. })));
}
