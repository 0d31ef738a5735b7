use std::fs;
use std::path::PathBuf;
use storefront_client::application::session::{FileTokenStore, TokenStore};

fn temp_token_path() -> PathBuf {
    std::env::temp_dir()
        .join(format!("storefront-{}", nanoid::nanoid!()))
        .join("token.json")
}

#[test]
fn test_file_store_missing_file_is_no_token() {
    let store = FileTokenStore::new(temp_token_path());
    assert_eq!(store.token(), None);
    assert!(store.clear_token().is_ok());
}

#[test]
fn test_file_store_persists_across_instances() {
    let path = temp_token_path();
    let store = FileTokenStore::new(&path);
    store.set_token("persisted").unwrap();

    let reopened = FileTokenStore::new(&path);
    assert_eq!(reopened.token().as_deref(), Some("persisted"));

    reopened.clear_token().unwrap();
    assert_eq!(store.token(), None);
    assert!(!path.exists());
}

#[test]
fn test_file_store_malformed_file_is_no_token() {
    let path = temp_token_path();
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "not json").unwrap();

    let store = FileTokenStore::new(&path);
    assert_eq!(store.token(), None);

    store.set_token("fixed").unwrap();
    assert_eq!(store.token().as_deref(), Some("fixed"));
    store.clear_token().unwrap();
}

#[test]
fn test_file_store_empty_token_clears() {
    let path = temp_token_path();
    let store = FileTokenStore::new(&path);
    store.set_token("abc").unwrap();
    store.set_token("").unwrap();
    assert_eq!(store.token(), None);
    assert!(!path.exists());
}

#[test]
fn test_file_store_writes_token_json() {
    let path = temp_token_path();
    let store = FileTokenStore::new(&path);
    store.set_token("abc").unwrap();

    let raw = fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value, serde_json::json!({"token": "abc"}));
    store.clear_token().unwrap();
}
