//! Wire-level tests against a one-shot local responder: bearer attachment
//! across the auth lifecycle, and error translation through a real response.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::Arc;
use std::thread::JoinHandle;

use chrono::Utc;

use swaphub_core::{
    ApiClient, ClientConfig, Error, ErrorKind, MemorySessionStore, Session, SessionStore,
    UserProfile,
};

/// Serve exactly one HTTP response, returning the raw request for inspection.
fn serve_once(status: &str, body: &str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind fixture listener");
    let addr = listener.local_addr().unwrap();
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );

    let handle = std::thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("Failed to accept connection");
        let mut request = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = stream.read(&mut chunk).expect("Failed to read request");
            request.extend_from_slice(&chunk[..n]);
            if n == 0 || request.windows(4).any(|w| w == b"\r\n\r\n") {
                break;
            }
        }
        stream
            .write_all(response.as_bytes())
            .expect("Failed to write response");
        String::from_utf8_lossy(&request).into_owned()
    });

    (format!("http://{}/api", addr), handle)
}

fn sample_user() -> UserProfile {
    UserProfile {
        id: 7,
        username: "swapper1".to_string(),
        email: "s@example.com".to_string(),
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

const ITEM_BODY: &str = r#"{
    "id": 5,
    "title": "Denim jacket",
    "description": "Lightly worn",
    "point_value": 25,
    "status": "available",
    "created_at": "2024-05-01T12:00:00Z",
    "category": "tops",
    "condition": "good"
}"#;

#[tokio::test]
async fn test_bearer_attached_while_logged_in_and_absent_after_logout() {
    let store = Arc::new(MemorySessionStore::new());
    store
        .set(&Session { token: "tok-wire".to_string(), user: sample_user() })
        .unwrap();

    // Logged in: the request carries the bearer header
    let (base, handle) = serve_once("200 OK", ITEM_BODY);
    let client = ApiClient::new(ClientConfig::new(base), store.clone()).unwrap();
    let item = client.get_item(5).await.expect("fixture response should decode");
    assert_eq!(item.title, "Denim jacket");

    let request = handle.join().unwrap().to_lowercase();
    assert!(
        request.contains("authorization: bearer tok-wire"),
        "expected bearer header, got:\n{}",
        request
    );

    // Logged out: the same client goes anonymous
    client.logout().unwrap();
    let (base, handle) = serve_once("200 OK", ITEM_BODY);
    let client = ApiClient::new(ClientConfig::new(base), store).unwrap();
    client.get_item(5).await.expect("anonymous fetch should succeed");

    let request = handle.join().unwrap().to_lowercase();
    assert!(
        !request.contains("authorization:"),
        "expected no auth header after logout, got:\n{}",
        request
    );
}

#[tokio::test]
async fn test_error_body_message_surfaces_through_get_item() {
    let (base, handle) = serve_once("404 Not Found", r#"{"message": "Item not found"}"#);
    let client = ApiClient::new(
        ClientConfig::new(base),
        Arc::new(MemorySessionStore::new()),
    )
    .unwrap();

    let err = client.get_item(99).await.unwrap_err();
    assert!(matches!(err, Error::Api { .. }));
    assert_eq!(err.kind(), Some(ErrorKind::NotFound));
    assert_eq!(err.to_string(), "Item not found");
    handle.join().unwrap();
}

#[tokio::test]
async fn test_unparseable_error_body_synthesizes_message() {
    let (base, handle) = serve_once("502 Bad Gateway", "<html>upstream down</html>");
    let client = ApiClient::new(
        ClientConfig::new(base),
        Arc::new(MemorySessionStore::new()),
    )
    .unwrap();

    let err = client.get_item(1).await.unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::Server));
    assert_eq!(err.to_string(), "fetch item failed: 502 Bad Gateway");
    handle.join().unwrap();
}
