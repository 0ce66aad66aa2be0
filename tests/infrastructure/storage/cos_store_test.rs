use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use cloudrun_ingest::application::ports::{ObjectStorage, StorageError};
use cloudrun_ingest::domain::{Credentials, FileReference};
use cloudrun_ingest::infrastructure::storage::{CosObjectStorage, DEFAULT_ENDPOINT_TEMPLATE};

#[test]
fn given_default_template_when_building_endpoint_then_uses_virtual_hosted_cos_domain() {
    let storage = CosObjectStorage::new("ap-shanghai", DEFAULT_ENDPOINT_TEMPLATE);

    assert_eq!(
        storage.endpoint_for("7072-prod-1312737058"),
        "https://7072-prod-1312737058.cos.ap-shanghai.myqcloud.com"
    );
}

#[test]
fn given_custom_template_when_building_endpoint_then_placeholders_are_substituted() {
    let storage = CosObjectStorage::new("ap-guangzhou", "http://localhost:9000/{region}/{bucket}");

    assert_eq!(
        storage.endpoint_for("b"),
        "http://localhost:9000/ap-guangzhou/b"
    );
}

#[tokio::test]
async fn given_missing_credentials_when_fetching_then_fails_before_network() {
    // Port 1 has no listener; reaching it would surface as Transient.
    let storage = CosObjectStorage::new("ap-shanghai", "http://127.0.0.1:1/{bucket}");
    let location = FileReference::parse("cloud://env.bucket/doc.pdf").unwrap();

    let result = storage.fetch(&location, &Credentials::new("", "")).await;

    assert!(matches!(result, Err(StorageError::MissingCredentials)));
}

#[test]
fn given_endpoint_scheme_when_checking_then_http_is_allowed_only_for_http_templates() {
    assert!(CosObjectStorage::new("ap-shanghai", "http://127.0.0.1:9000").allows_http());
    assert!(!CosObjectStorage::new("ap-shanghai", DEFAULT_ENDPOINT_TEMPLATE).allows_http());
}

#[tokio::test]
async fn given_endpoint_dropping_connections_when_fetching_then_single_attempt_is_made() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    let accepted = Arc::new(AtomicUsize::new(0));

    let counter = Arc::clone(&accepted);
    tokio::spawn(async move {
        while let Ok((socket, _)) = listener.accept().await {
            counter.fetch_add(1, Ordering::SeqCst);
            drop(socket);
        }
    });

    let storage = CosObjectStorage::new("ap-shanghai", format!("http://127.0.0.1:{port}"));
    let location = FileReference::parse("cloud://env.bucket/doc.pdf").unwrap();

    let result = storage
        .fetch(&location, &Credentials::new("AKIDtest", "secret"))
        .await;
    tokio::time::sleep(Duration::from_millis(200)).await;

    assert!(matches!(result, Err(StorageError::Transient(_))));
    assert_eq!(accepted.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn given_key_with_empty_segment_when_fetching_then_rejected_before_request() {
    let storage = CosObjectStorage::new("ap-shanghai", "http://127.0.0.1:1/{bucket}");
    let location = FileReference::parse("cloud://env.bucket/a//b.pdf").unwrap();

    let result = storage
        .fetch(&location, &Credentials::new("AKIDtest", "secret"))
        .await;

    assert!(matches!(result, Err(StorageError::NotFound(_))));
}
