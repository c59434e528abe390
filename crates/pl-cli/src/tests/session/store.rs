use crate::session::{PersistedSession, SessionStore};

use serde_json::json;
use tempfile::TempDir;

#[test]
fn test_path_is_session_json_under_dir() {
    let dir = TempDir::new().unwrap();
    let store = SessionStore::with_dir(dir.path());

    assert_eq!(store.path(), dir.path().join("session.json"));
}

#[test]
fn test_save_then_load_round_trips() {
    let dir = TempDir::new().unwrap();
    let store = SessionStore::with_dir(dir.path());

    let session = PersistedSession {
        token: "token-123".to_string(),
        user: json!({ "id": "u1", "email": "ada@example.org" }),
    };

    store.save(&session).unwrap();
    let loaded = store.load().unwrap();

    assert_eq!(loaded, session);
}

#[test]
fn test_load_missing_file_is_none() {
    let dir = TempDir::new().unwrap();
    let store = SessionStore::with_dir(dir.path());

    assert!(store.load().is_none());
}

#[test]
fn test_load_corrupt_file_is_none() {
    let dir = TempDir::new().unwrap();
    let store = SessionStore::with_dir(dir.path());

    std::fs::write(store.path(), "{not json").unwrap();

    assert!(store.load().is_none());
}

#[test]
fn test_save_creates_missing_directory() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("config").join("peerlearn");
    let store = SessionStore::with_dir(&nested);

    let session = PersistedSession {
        token: "token-123".to_string(),
        user: json!({}),
    };

    store.save(&session).unwrap();

    assert!(store.path().exists());
}

#[test]
fn test_clear_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let store = SessionStore::with_dir(dir.path());

    let session = PersistedSession {
        token: "token-123".to_string(),
        user: json!({}),
    };

    store.save(&session).unwrap();

    store.clear().unwrap();
    assert!(!store.path().exists());

    // Clearing again finds nothing to remove and still succeeds
    store.clear().unwrap();
}
