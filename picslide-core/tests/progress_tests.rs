use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use picslide_core::ProgressStore;
use pretty_assertions::assert_eq;

fn temp_store(tag: &str) -> (ProgressStore, PathBuf) {
    let path = std::env::temp_dir().join(format!("picslide_progress_{}_{}", std::process::id(), tag));
    let _ = fs::remove_file(&path);
    (ProgressStore::new(&path), path)
}

#[test]
fn save_then_load_round_trips() {
    let (store, path) = temp_store("roundtrip");
    let solved: BTreeSet<i32> = [2, 5, 9].into_iter().collect();
    store.save(&solved, 7).unwrap();
    assert_eq!(store.load(), (solved, 7));
    fs::remove_file(path).unwrap();
}

#[test]
fn missing_file_yields_first_run_defaults() {
    let (store, _path) = temp_store("missing");
    assert_eq!(store.load(), (BTreeSet::new(), 0));
}

#[test]
fn empty_set_round_trips() {
    let (store, path) = temp_store("empty");
    store.save(&BTreeSet::new(), 3).unwrap();
    assert_eq!(store.load(), (BTreeSet::new(), 3));
    fs::remove_file(path).unwrap();
}

#[test]
fn on_disk_layout_is_fixed() {
    let (store, path) = temp_store("layout");
    let solved: BTreeSet<i32> = [1, 3].into_iter().collect();
    store.save(&solved, 2).unwrap();
    let bytes = fs::read(&path).unwrap();
    // i32 last_viewed, u32 count, then count i32 indices, little-endian
    assert_eq!(
        bytes,
        vec![2, 0, 0, 0, 2, 0, 0, 0, 1, 0, 0, 0, 3, 0, 0, 0]
    );
    fs::remove_file(path).unwrap();
}

#[test]
fn truncated_file_yields_defaults() {
    let (store, path) = temp_store("truncated");
    // header promises three entries but carries only one
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&5i32.to_le_bytes());
    bytes.extend_from_slice(&3u32.to_le_bytes());
    bytes.extend_from_slice(&1i32.to_le_bytes());
    fs::write(&path, bytes).unwrap();
    assert_eq!(store.load(), (BTreeSet::new(), 0));
    fs::remove_file(path).unwrap();
}

#[test]
fn save_overwrites_previous_state() {
    let (store, path) = temp_store("overwrite");
    let first: BTreeSet<i32> = (0..20).collect();
    store.save(&first, 4).unwrap();
    let second: BTreeSet<i32> = [11].into_iter().collect();
    store.save(&second, 1).unwrap();
    assert_eq!(store.load(), (second, 1));
    fs::remove_file(path).unwrap();
}
