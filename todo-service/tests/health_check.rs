mod common;

use async_trait::async_trait;
use common::TestApp;
use mongodb::bson::Document;
use reqwest::Client;
use service_core::error::AppError;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use todo_service::services::{FindAll, MemoryStore, RecordStore};

/// Delegates to a memory store, counting `close` calls and optionally failing pings.
#[derive(Default)]
struct ObservedStore {
    inner: MemoryStore,
    closes: AtomicUsize,
    unhealthy: bool,
}

#[async_trait]
impl RecordStore for ObservedStore {
    async fn insert(&self, collection: &str, record: Document) -> Result<(), AppError> {
        self.inner.insert(collection, record).await
    }

    async fn find_all(&self, collection: &str, query: FindAll) -> Result<Vec<Document>, AppError> {
        self.inner.find_all(collection, query).await
    }

    async fn find_one(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<Option<Document>, AppError> {
        self.inner.find_one(collection, filter).await
    }

    async fn update_fields(
        &self,
        collection: &str,
        filter: Document,
        fields: Document,
    ) -> Result<u64, AppError> {
        self.inner.update_fields(collection, filter, fields).await
    }

    async fn delete_one(&self, collection: &str, filter: Document) -> Result<u64, AppError> {
        self.inner.delete_one(collection, filter).await
    }

    async fn health_check(&self) -> Result<(), AppError> {
        if self.unhealthy {
            Err(AppError::ServiceUnavailable)
        } else {
            Ok(())
        }
    }

    async fn close(&self) {
        self.closes.fetch_add(1, Ordering::SeqCst);
    }
}

#[tokio::test]
async fn health_check_works() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/health", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());
    assert!(response.headers().contains_key("x-request-id"));

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "todo-service");

    drop(client);
    app.stop().await;
}

#[tokio::test]
async fn health_reports_unavailable_store() {
    let store = Arc::new(ObservedStore {
        unhealthy: true,
        ..Default::default()
    });
    let app = TestApp::spawn_with_store(store).await;
    let client = Client::new();

    let health = client
        .get(format!("{}/health", app.address))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(health.status(), 503);
    let body: serde_json::Value = health.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "unhealthy");

    let ready = client
        .get(format!("{}/ready", app.address))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(ready.status(), 503);

    drop(client);
    app.stop().await;
}

#[tokio::test]
async fn metrics_endpoint_returns_text() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/metrics", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());
    let content_type = response
        .headers()
        .get("content-type")
        .expect("Missing content-type header")
        .to_str()
        .expect("Invalid content-type")
        .to_string();
    assert!(content_type.starts_with("text/plain"));

    drop(client);
    app.stop().await;
}

#[tokio::test]
async fn store_is_closed_once_on_shutdown() {
    let store = Arc::new(ObservedStore::default());
    let app = TestApp::spawn_with_store(store.clone()).await;

    let client = Client::new();
    let response = client
        .post(format!("{}/api/todos", app.address))
        .json(&serde_json::json!({ "text": "served over tcp" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert!(response.status().is_success());
    drop(client);

    assert_eq!(store.closes.load(Ordering::SeqCst), 0);
    app.stop().await;
    assert_eq!(store.closes.load(Ordering::SeqCst), 1);
}
