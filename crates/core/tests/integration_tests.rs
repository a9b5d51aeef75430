//! Integration tests for histscript-core
//!
//! These tests verify that the core functionality works together correctly
//! by testing complete workflows end-to-end.

use histscript_core::{
    error::Error,
    history::parse_history,
    history_source::{load_history, HistoryFile, StaticHistory},
    pager::{next_cursor, page},
    script::{FileScriptWriter, ScriptWriter},
    selection_store::SelectionStore,
};
use std::fs;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

const SAMPLE: &str = "    1  ls\n    2  cd /tmp\n    3  git status\n";

/// Test selecting, reordering and writing a script from parsed history
#[test]
fn test_select_and_write_script_workflow() {
    let sequence = load_history(&StaticHistory(SAMPLE.to_string()), None).unwrap();
    let mut store = SelectionStore::new();

    store.apply(&sequence, "3,1-2").unwrap();
    // Drop `ls` and add it back so it moves to the end
    store.apply(&sequence, "1").unwrap();
    store.apply(&sequence, "1").unwrap();

    let snapshot: Vec<&str> = store
        .snapshot(&sequence)
        .iter()
        .map(|c| c.text.as_str())
        .collect();
    assert_eq!(snapshot, vec!["git status", "cd /tmp", "ls"]);

    let directory = TempDir::new().unwrap();
    let writer = FileScriptWriter::new(directory.path());
    let path = writer.save("replay", &snapshot).unwrap();

    assert_eq!(path, directory.path().join("replay.sh"));
    assert_eq!(
        fs::read_to_string(path).unwrap(),
        "#!/bin/bash\ngit status\ncd /tmp\nls\n"
    );
}

/// A rejected expression must not change an existing selection
#[test]
fn test_invalid_expression_preserves_selection() {
    let sequence = parse_history(SAMPLE).unwrap();
    let mut store = SelectionStore::new();
    store.apply(&sequence, "2").unwrap();
    let before = store.clone();

    for expression in ["5", "1,x", "3-1", "1,,2"] {
        let error = store.apply(&sequence, expression).unwrap_err();
        assert!(error.is_invalid_selection());
        assert_eq!(store, before);
    }
}

/// Test that a failed write leaves the selection available for a retry
#[test]
fn test_failed_write_can_be_retried() {
    let sequence = parse_history(SAMPLE).unwrap();
    let mut store = SelectionStore::new();
    store.apply(&sequence, "2-3").unwrap();

    let snapshot: Vec<&str> = store
        .snapshot(&sequence)
        .iter()
        .map(|c| c.text.as_str())
        .collect();

    let broken = FileScriptWriter::new("/this/path/does/not/exist");
    let error = broken.save("retry", &snapshot).unwrap_err();
    assert!(matches!(error, Error::ScriptWrite { .. }));
    assert!(error.is_recoverable());
    assert_eq!(store.count(), 2);

    let directory = TempDir::new().unwrap();
    let writer = FileScriptWriter::new(directory.path());
    assert!(writer.save("retry", &snapshot).is_ok());
}

/// Test paging through a history file larger than one page
#[test]
fn test_history_file_paging_workflow() {
    let mut temp_file = NamedTempFile::new().unwrap();
    for i in 0..25 {
        writeln!(temp_file, "#17000000{i:02}").unwrap();
        writeln!(temp_file, "echo {i}").unwrap();
    }

    let source = HistoryFile {
        path: temp_file.path().to_str().unwrap().to_string(),
    };
    let sequence = load_history(&source, Some(20)).unwrap();
    assert_eq!(sequence.len(), 20);
    assert_eq!(sequence.at_position(1).unwrap().text, "echo 5");

    let first = page(sequence.len(), 0, 8);
    assert_eq!(first.range, 0..8);
    assert!(first.has_next);

    let cursor = next_cursor(next_cursor(0, sequence.len(), 8), sequence.len(), 8);
    let last = page(sequence.len(), cursor, 8);
    assert_eq!(last.range, 12..20);
    assert!(!last.has_next);
    assert!(last.has_previous);
}
