//! `ManifestCorpus` loaded from JSON files.

use std::fs;

use cvsift::{CorpusError, DocumentSource, ManifestCorpus};

#[test]
fn test_load_resolves_relative_paths() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = dir.path().join("applicants.json");
    fs::write(
        &manifest,
        r#"{
            "version": 1,
            "documents": [
                {"id": 10, "name": "Budi", "path": "it/budi.txt", "category": "IT"},
                {"id": 11, "name": "Ana", "path": "hr/ana.txt", "category": "HR"}
            ]
        }"#,
    )
    .unwrap();

    let corpus = ManifestCorpus::load(&manifest).unwrap();
    let entries = corpus.list_documents(&[], None).unwrap();
    assert_eq!(entries[0].display_name, "Ana");
    assert_eq!(entries[0].path, dir.path().join("hr/ana.txt"));
    assert_eq!(entries[1].id, 10);

    let it = corpus.list_documents(&["IT".to_string()], None).unwrap();
    assert_eq!(it.len(), 1);
}

#[test]
fn test_bad_version() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = dir.path().join("m.json");
    fs::write(&manifest, r#"{"version": 2, "documents": []}"#).unwrap();
    assert!(matches!(
        ManifestCorpus::load(&manifest),
        Err(CorpusError::ManifestVersion { found: 2, expected: 1 })
    ));
}

#[test]
fn test_duplicate_ids() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = dir.path().join("m.json");
    fs::write(
        &manifest,
        r#"{"version": 1, "documents": [
            {"id": 1, "name": "a", "path": "a.txt"},
            {"id": 1, "name": "b", "path": "b.txt"}
        ]}"#,
    )
    .unwrap();
    assert!(matches!(ManifestCorpus::load(&manifest), Err(CorpusError::DuplicateId(1))));
}

#[test]
fn test_malformed_json() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = dir.path().join("m.json");
    fs::write(&manifest, "{ not json").unwrap();
    assert!(matches!(ManifestCorpus::load(&manifest), Err(CorpusError::Manifest { .. })));
}

#[test]
fn test_missing_manifest() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        ManifestCorpus::load(dir.path().join("absent.json")),
        Err(CorpusError::Io { .. })
    ));
}
