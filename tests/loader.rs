use std::io::Write;

use tempfile::NamedTempFile;

use wordtree::{load_words, Error};

fn word_list(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_words() {
    let file = word_list("banana\napple\napplication\napple\ncherry\n");
    let tree = load_words(file.path()).unwrap();

    assert_eq!(tree.len(), 4);
    assert_eq!(
        tree.traverse_in_order().collect::<Vec<_>>(),
        ["apple", "application", "banana", "cherry"]
    );
    assert_eq!(tree.search_by_prefix("app").collect::<Vec<_>>(), ["apple", "application"]);
    assert_eq!(tree.search_by_edit_distance("banan").collect::<Vec<_>>(), ["banana"]);
}

#[test]
fn test_load_words_crlf() {
    let file = word_list("kitten\r\nmitten\r\n");
    let tree = load_words(file.path()).unwrap();
    assert_eq!(tree.iter().collect::<Vec<_>>(), ["kitten", "mitten"]);
    assert_eq!(tree.search_by_edit_distance("sitten").collect::<Vec<_>>(), ["kitten", "mitten"]);
}

#[test]
fn test_load_empty_file() {
    let file = word_list("");
    let tree = load_words(file.path()).unwrap();
    assert!(tree.is_empty());
    assert_eq!(tree.search_by_prefix("a").count(), 0);
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.txt");
    match load_words(&path) {
        Err(Error::NotFound { path: reported }) => assert_eq!(reported, path),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn test_load_directory_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_words(dir.path()).unwrap_err();
    assert!(matches!(err, Error::Io(_)), "{err}");
}
