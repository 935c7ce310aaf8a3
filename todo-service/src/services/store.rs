//! Record store abstraction.
//!
//! The store owns all persisted state. Collections hold schemaless BSON
//! documents; typed decoding happens in the resource services so that a
//! malformed record can be reported as a data integrity failure.

use async_trait::async_trait;
use mongodb::bson::Document;
use serde::de::DeserializeOwned;
use service_core::error::AppError;

/// Upper bound on documents returned by any listing.
pub const LIST_LIMIT: i64 = 1000;

/// Options for [`RecordStore::find_all`].
#[derive(Debug, Clone, Default)]
pub struct FindAll {
    /// Sort specification such as `{ "created_at": -1 }`. `None` keeps the
    /// store's natural order.
    pub sort: Option<Document>,
    pub limit: Option<i64>,
}

#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn insert(&self, collection: &str, record: Document) -> Result<(), AppError>;

    async fn find_all(&self, collection: &str, query: FindAll) -> Result<Vec<Document>, AppError>;

    async fn find_one(&self, collection: &str, filter: Document)
        -> Result<Option<Document>, AppError>;

    /// Merges `fields` into the first document matching `filter`. Returns the
    /// number of matched documents (0 or 1). An empty `fields` writes nothing.
    async fn update_fields(
        &self,
        collection: &str,
        filter: Document,
        fields: Document,
    ) -> Result<u64, AppError>;

    /// Deletes the first document matching `filter`, returning how many were removed.
    async fn delete_one(&self, collection: &str, filter: Document) -> Result<u64, AppError>;

    async fn health_check(&self) -> Result<(), AppError>;

    /// Releases the underlying connection. Later calls are no-ops.
    async fn close(&self);
}

/// Decodes a stored document, reporting shape mismatches as data integrity errors.
pub fn decode<T: DeserializeOwned>(collection: &str, record: Document) -> Result<T, AppError> {
    let id = record
        .get_str("id")
        .map(str::to_string)
        .unwrap_or_else(|_| "<missing id>".to_string());

    mongodb::bson::from_document(record).map_err(|e| {
        tracing::error!(collection, record_id = %id, error = %e, "Stored record does not match expected shape");
        AppError::DataIntegrity(anyhow::anyhow!("{} record {}: {}", collection, id, e))
    })
}

/// Encodes an entity for insertion.
pub fn encode<T: serde::Serialize>(entity: &T) -> Result<Document, AppError> {
    mongodb::bson::to_document(entity)
        .map_err(|e| AppError::InternalError(anyhow::anyhow!("Failed to encode record: {}", e)))
}
