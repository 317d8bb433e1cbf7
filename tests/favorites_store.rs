use std::collections::BTreeSet;
use std::fs;

use tempfile::TempDir;

use sejour::favorites::Favorites;
use sejour::store::fs::FileBackend;
use sejour::store::FavoritesBackend;

fn setup() -> (TempDir, FileBackend) {
    let dir = TempDir::new().unwrap();
    let backend = FileBackend::new(dir.path().join("favorites.json"));
    (dir, backend)
}

fn set_of(ids: &[&str]) -> BTreeSet<String> {
    ids.iter().map(|s| s.to_string()).collect()
}

#[test]
fn save_then_load_round_trips() {
    let (_dir, mut backend) = setup();
    let favorites = set_of(&["l-03", "l-07", "l-11"]);

    backend.save(&favorites).unwrap();
    assert_eq!(backend.load().unwrap(), favorites);
}

#[test]
fn missing_file_loads_as_empty_set() {
    let (_dir, backend) = setup();
    assert!(backend.load().unwrap().is_empty());
}

#[test]
fn stored_form_is_a_json_array_of_ids() {
    let (_dir, mut backend) = setup();
    backend.save(&set_of(&["b", "a"])).unwrap();

    let on_disk = fs::read_to_string(backend.path()).unwrap();
    let ids: Vec<String> = serde_json::from_str(&on_disk).unwrap();
    assert_eq!(ids, vec!["a", "b"]);
}

#[test]
fn corrupt_file_degrades_to_empty_set() {
    let (_dir, backend) = setup();
    fs::write(backend.path(), "{ not json ]").unwrap();
    assert!(backend.load().unwrap().is_empty());
}

#[test]
fn save_creates_missing_parent_directories() {
    let dir = TempDir::new().unwrap();
    let mut backend = FileBackend::new(dir.path().join("nested").join("favorites.json"));
    backend.save(&set_of(&["l-01"])).unwrap();
    assert_eq!(backend.load().unwrap(), set_of(&["l-01"]));
}

#[test]
fn toggles_persist_across_reopen() {
    let (_dir, backend) = setup();
    let path = backend.path().to_path_buf();

    let mut favorites = Favorites::open(backend).unwrap();
    favorites.toggle("l-02").unwrap();
    favorites.toggle("l-05").unwrap();
    favorites.toggle("l-02").unwrap();

    let reopened = Favorites::open(FileBackend::new(path)).unwrap();
    assert_eq!(reopened.get(), &set_of(&["l-05"]));
}
