mod common;

use async_trait::async_trait;
use axum::http::StatusCode;
use common::TestRouter;
use mongodb::bson::Document;
use serde_json::json;
use service_core::error::AppError;
use std::sync::Arc;
use todo_service::services::{FindAll, RecordStore};

/// A store whose every operation fails as if the database were unreachable.
struct UnreachableStore;

fn refused() -> AppError {
    AppError::DatabaseError(anyhow::anyhow!("connection refused"))
}

#[async_trait]
impl RecordStore for UnreachableStore {
    async fn insert(&self, _collection: &str, _record: Document) -> Result<(), AppError> {
        Err(refused())
    }

    async fn find_all(&self, _collection: &str, _query: FindAll) -> Result<Vec<Document>, AppError> {
        Err(refused())
    }

    async fn find_one(
        &self,
        _collection: &str,
        _filter: Document,
    ) -> Result<Option<Document>, AppError> {
        Err(refused())
    }

    async fn update_fields(
        &self,
        _collection: &str,
        _filter: Document,
        _fields: Document,
    ) -> Result<u64, AppError> {
        Err(refused())
    }

    async fn delete_one(&self, _collection: &str, _filter: Document) -> Result<u64, AppError> {
        Err(refused())
    }

    async fn health_check(&self) -> Result<(), AppError> {
        Err(refused())
    }

    async fn close(&self) {}
}

fn app() -> TestRouter {
    TestRouter::with_store(Arc::new(UnreachableStore))
}

#[tokio::test]
async fn create_todo_surfaces_store_failure_as_500() {
    let (status, body) = app().post("/api/todos", json!({ "text": "lost" })).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Database error");
    assert_eq!(body["details"], "connection refused");
}

#[tokio::test]
async fn list_todos_surfaces_store_failure_as_500() {
    let (status, body) = app().get("/api/todos").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Database error");
}

#[tokio::test]
async fn update_todo_surfaces_store_failure_as_500() {
    let (status, body) = app()
        .put("/api/todos/any-id", json!({ "completed": true }))
        .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Database error");
}

#[tokio::test]
async fn delete_todo_surfaces_store_failure_as_500() {
    let (status, body) = app().delete("/api/todos/any-id").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Database error");
}

#[tokio::test]
async fn status_checks_surface_store_failure_as_500() {
    let app = app();

    let (status, body) = app.post("/api/status", json!({ "client_name": "monitor" })).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Database error");

    let (status, body) = app.get("/api/status").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Database error");
}
