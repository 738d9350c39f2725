use super::*;
use serde::Deserialize;

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Draft {
    title: String,
    count: u32,
}

#[test]
fn memory_storage_clones_share_items() {
    let storage = MemoryStorage::new();
    let reloaded = storage.clone();
    storage.set_item("k", "v").unwrap();
    assert_eq!(reloaded.get_item("k"), Some("v".to_owned()));

    reloaded.remove_item("k");
    assert!(!storage.contains_key("k"));
    assert!(storage.is_empty());
}

#[test]
fn save_then_load_json() {
    let storage = MemoryStorage::new();
    let draft = Draft { title: "bike".to_owned(), count: 2 };
    save_json(&storage, "draft", &draft).unwrap();
    assert_eq!(load_json::<Draft>(&storage, "draft"), Some(draft));
}

#[test]
fn load_json_absent_is_none() {
    let storage = MemoryStorage::new();
    assert_eq!(load_json::<Draft>(&storage, "draft"), None);
}

#[test]
fn load_json_malformed_is_none() {
    let storage = MemoryStorage::new();
    storage.set_item("draft", "{not json").unwrap();
    assert_eq!(load_json::<Draft>(&storage, "draft"), None);

    storage.set_item("draft", r#"{"title":"bike"}"#).unwrap();
    assert_eq!(load_json::<Draft>(&storage, "draft"), None);
}

#[cfg(not(feature = "csr"))]
#[test]
fn browser_storage_is_inert_natively() {
    let storage = BrowserSessionStorage;
    assert_eq!(storage.set_item("k", "v"), Err(StorageError::Unavailable));
    assert_eq!(storage.get_item("k"), None);
    storage.remove_item("k");
}
