//! Integration tests for the JSON-backed todo store
//!
//! These tests go through the public API against a real file on disk.

use std::fs;

use proptest::prelude::*;
use tempfile::TempDir;
use todolist::{JsonFile, Persistence, SaveStatus, StoreError, TodoItem, TodoList, TodoStore};

fn read(path: &std::path::Path) -> String {
    fs::read_to_string(path).expect("Failed to read store file")
}

#[test]
fn test_open_add_toggle_delete_scenario() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("todolist.json");
    let store = TodoStore::open(&path);

    // No file yet: empty list, nothing written
    let mut list = store.load().expect("Failed to load");
    assert!(list.is_empty());
    assert!(!path.exists());

    store.add_task(&mut list, "Buy milk");
    assert_eq!(read(&path), r#"{"Tasks":["Buy milk"],"TaskStates":[false]}"#);

    store.toggle_task(&mut list, 0).expect("Failed to toggle");
    assert_eq!(read(&path), r#"{"Tasks":["Buy milk"],"TaskStates":[true]}"#);

    store.delete_task(&mut list, 0).expect("Failed to delete");
    assert_eq!(read(&path), r#"{"Tasks":[],"TaskStates":[]}"#);
}

#[test]
fn test_blank_add_does_not_touch_disk() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("todolist.json");
    let store = TodoStore::open(&path);
    let mut list = store.load().expect("Failed to load");

    assert_eq!(store.add_task(&mut list, ""), None);
    assert_eq!(store.add_task(&mut list, "   "), None);
    assert!(!path.exists());

    store.add_task(&mut list, "real");
    let written = read(&path);
    store.add_task(&mut list, "\t");
    assert_eq!(read(&path), written);
}

#[test]
fn test_reopen_sees_previous_session() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("todolist.json");

    {
        let store = TodoStore::open(&path);
        let mut list = store.load().unwrap();
        store.add_task(&mut list, "first");
        store.add_task(&mut list, "second");
        store.set_done(&mut list, 1, true).unwrap();
    }

    let list = TodoStore::open(&path).load().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list.get(0), Some(&TodoItem::new("first")));
    assert!(list.get(1).unwrap().done);
}

#[test]
fn test_reads_file_written_by_other_tools() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("todolist.json");
    fs::write(
        &path,
        "{\n  \"Tasks\": [\"a\", \"b\"],\n  \"TaskStates\": [true, false]\n}\n",
    )
    .unwrap();

    let list = TodoStore::open(&path).load().unwrap();
    let done: Vec<bool> = list.iter().map(|item| item.done).collect();
    assert_eq!(done, vec![true, false]);
}

#[test]
fn test_corrupt_store_is_reported_and_left_alone() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("todolist.json");
    let content = r#"{"Tasks":["a"],"TaskStates":[]}"#;
    fs::write(&path, content).unwrap();

    let err = TodoStore::open(&path).load().unwrap_err();
    match err {
        StoreError::Corrupt { path: reported, reason } => {
            assert_eq!(reported, path);
            assert!(reason.contains("TaskStates has 0"), "reason: {}", reason);
        }
        other => panic!("Expected Corrupt, got {:?}", other),
    }
    assert_eq!(read(&path), content);
}

fn arb_list() -> impl Strategy<Value = TodoList> {
    prop::collection::vec((".*", any::<bool>()), 0..16)
        .prop_map(|pairs| pairs.into_iter().map(|(text, done)| TodoItem { text, done }).collect())
}

proptest! {
    #[test]
    fn prop_save_then_load_is_identity(list in arb_list()) {
        let temp_dir = TempDir::new().unwrap();
        let file = JsonFile::new(temp_dir.path().join("todolist.json"));

        prop_assert_eq!(file.save(&list), SaveStatus::Saved);
        prop_assert_eq!(file.load().unwrap(), list);
    }
}
