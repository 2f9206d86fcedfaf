//! Integration tests for session persistence and the auth lifecycle invariants

use std::sync::Arc;

use chrono::Utc;
use tempfile::TempDir;

use swaphub_core::{
    ApiClient, ClientConfig, FileSessionStore, MemorySessionStore, Session, SessionStore,
    UserProfile,
};

fn sample_user(username: &str) -> UserProfile {
    UserProfile {
        id: 7,
        username: username.to_string(),
        email: format!("{}@example.com", username),
        first_name: String::new(),
        last_name: String::new(),
        points: 100,
        location: String::new(),
        profile_picture: None,
        is_private: false,
        date_joined: Utc::now(),
        total_items: 0,
        items_swapped: 0,
        active_swaps: 0,
        total_likes_received: 0,
    }
}

/// Helper to create a file store on a temp dir
fn temp_store() -> (FileSessionStore, TempDir) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = FileSessionStore::open(dir.path().join("session.json"));
    (store, dir)
}

#[test]
fn test_file_store_survives_reopen() {
    let (store, dir) = temp_store();
    store
        .set(&Session { token: "tok-abc".to_string(), user: sample_user("swapper1") })
        .expect("Failed to persist session");

    // A fresh store over the same path sees the same session
    let reopened = FileSessionStore::open(dir.path().join("session.json"));
    let session = reopened.get().expect("session should be readable");
    assert_eq!(session.token, "tok-abc");
    assert_eq!(session.user.points, 100);
}

#[test]
fn test_client_auth_lifecycle() {
    let store = Arc::new(MemorySessionStore::new());
    let client = ApiClient::new(ClientConfig::new("http://localhost:8000/api"), store.clone())
        .expect("Failed to build client");

    // Anonymous before any login
    assert!(!client.is_authenticated());

    // A stored session makes the client authenticated, regardless of token validity
    store
        .set(&Session { token: "not-even-a-jwt".to_string(), user: sample_user("swapper1") })
        .unwrap();
    assert!(client.is_authenticated());
    assert_eq!(client.session().token().as_deref(), Some("not-even-a-jwt"));

    // Logout clears the record; subsequent requests would go out anonymous
    client.logout().expect("logout should clear the store");
    assert!(!client.is_authenticated());
    assert!(client.session().token().is_none());
}

#[test]
fn test_logout_is_idempotent() {
    let (store, _dir) = temp_store();
    let client = ApiClient::new(ClientConfig::default(), Arc::new(store))
        .expect("Failed to build client");
    client.logout().expect("logout with no session is fine");
    client.logout().expect("and again");
}
