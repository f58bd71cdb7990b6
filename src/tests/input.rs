use super::{find_document, load_sections, resolve_document};
use crate::error::Error;
use crate::formats::markdown::MarkdownFormat;
use std::fs;
use tempfile::TempDir;

fn md() -> Vec<String> {
    vec!["md".to_string()]
}

fn chains_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("tc-1-genesis.md"), "### 0.0 Root\nroot\n").unwrap();
    fs::write(dir.path().join("tc-1-archive.md"), "### 0.0 Old\nold\n").unwrap();
    fs::write(dir.path().join("tc-2.txt"), "### 0.0 Text\n").unwrap();
    fs::write(dir.path().join("tc-3.md"), "no headers here\n").unwrap();
    dir
}

#[test]
fn test_first_match_in_name_order() {
    let dir = chains_dir();
    let path = find_document(dir.path(), "tc-1", &md()).unwrap();
    assert_eq!(path.file_name().unwrap(), "tc-1-archive.md");
}

#[test]
fn test_extension_filter() {
    let dir = chains_dir();
    assert!(matches!(
        find_document(dir.path(), "tc-2", &md()),
        Err(Error::DocumentNotFound { .. })
    ));
    let txt = vec!["txt".to_string()];
    assert!(find_document(dir.path(), "tc-2", &txt).is_ok());
}

#[test]
fn test_unknown_chain() {
    let dir = chains_dir();
    let err = find_document(dir.path(), "tc-9", &md()).unwrap_err();
    assert!(
        err.to_string().contains("\"tc-9\""),
        "Message should name the chain: {err}"
    );
}

#[test]
fn test_missing_directory_is_document_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent");
    assert!(matches!(
        find_document(&missing, "tc-1", &md()),
        Err(Error::DocumentNotFound { .. })
    ));
}

#[test]
fn test_direct_path_bypasses_lookup() {
    let dir = chains_dir();
    let direct = dir.path().join("tc-3.md");
    let unrelated = tempfile::tempdir().unwrap();
    let resolved =
        resolve_document(direct.to_str().unwrap(), unrelated.path(), &md()).unwrap();
    assert_eq!(resolved, direct);
}

#[test]
fn test_load_sections() {
    let dir = chains_dir();
    let path = resolve_document("tc-1-genesis", dir.path(), &md()).unwrap();
    let sections = load_sections(&path, &MarkdownFormat::default()).unwrap();
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].content, "### 0.0 Root\nroot");

    let empty = load_sections(&dir.path().join("tc-3.md"), &MarkdownFormat::default()).unwrap();
    assert!(empty.is_empty());
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        load_sections(&dir.path().join("gone.md"), &MarkdownFormat::default()),
        Err(Error::Io { .. })
    ));
}

#[test]
fn test_chain_id_is_not_a_glob() {
    let dir = chains_dir();
    assert!(matches!(
        find_document(dir.path(), "tc-*", &md()),
        Err(Error::DocumentNotFound { .. })
    ));
    assert!(matches!(
        find_document(dir.path(), "tc-?", &md()),
        Err(Error::DocumentNotFound { .. })
    ));
}
