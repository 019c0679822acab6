//! `DocumentStoreArchive` against a mocked document store.

use mockito::{Matcher, Server};
use portfolio_contact_relay::error::ArchiveError;
use portfolio_contact_relay::{
    ArchivedMessage, ContactMessage, DocumentStoreArchive, MessageArchive,
};

fn document() -> ArchivedMessage {
    let message = ContactMessage::new("Alice", "a@x.com", "Hello").unwrap();
    ArchivedMessage::new(&message, "email_1")
}

#[tokio::test]
async fn test_store_posts_document_with_bearer_key() {
    let mut store = Server::new_async().await;
    let mock = store
        .mock("POST", "/messages")
        .match_header("authorization", "Bearer store_key")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "name": "Alice",
            "provider_id": "email_1"
        })))
        .with_status(201)
        .create_async()
        .await;

    let archive = DocumentStoreArchive::new(
        format!("{}/messages", store.url()),
        Some("store_key".to_string()),
        5,
    );

    assert!(archive.store(&document()).await.is_ok());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_store_server_error_is_store_error() {
    let mut store = Server::new_async().await;
    let _mock = store
        .mock("POST", "/messages")
        .with_status(500)
        .with_body("quota exceeded")
        .create_async()
        .await;

    let archive = DocumentStoreArchive::new(format!("{}/messages", store.url()), None, 5);

    match archive.store(&document()).await {
        Err(ArchiveError::StoreError { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "quota exceeded");
        }
        other => panic!("Expected StoreError, got: {:?}", other),
    }
}

#[tokio::test]
async fn test_unreachable_store_is_http_error() {
    let archive = DocumentStoreArchive::new("http://127.0.0.1:9/messages".to_string(), None, 5);

    assert!(matches!(
        archive.store(&document()).await,
        Err(ArchiveError::HttpError(_))
    ));
}
