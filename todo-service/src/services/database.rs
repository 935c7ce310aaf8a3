use crate::models::{status_check::STATUS_CHECKS_COLLECTION, todo::TODOS_COLLECTION};
use crate::services::store::{FindAll, RecordStore};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, Document},
    options::{FindOptions, IndexOptions},
    Client as MongoClient, Collection, Database, IndexModel,
};
use service_core::error::AppError;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

#[derive(Clone)]
pub struct MongoStore {
    client: MongoClient,
    db: Database,
    closed: Arc<AtomicBool>,
}

impl MongoStore {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!("Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to connect to MongoDB: {}", e);
            AppError::from(e)
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "Successfully connected to MongoDB database");
        Ok(Self {
            client,
            db,
            closed: Arc::new(AtomicBool::new(false)),
        })
    }

    pub async fn initialize_indexes(&self) -> Result<(), AppError> {
        tracing::info!("Creating MongoDB indexes for todo-service");

        for collection in [TODOS_COLLECTION, STATUS_CHECKS_COLLECTION] {
            let id_index = IndexModel::builder()
                .keys(doc! { "id": 1 })
                .options(
                    IndexOptions::builder()
                        .name("id_unique".to_string())
                        .unique(true)
                        .build(),
                )
                .build();

            self.collection(collection)
                .create_index(id_index, None)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to create id index on {} collection: {}", collection, e);
                    AppError::from(e)
                })?;
            tracing::info!("Created unique index on {}.id", collection);
        }

        // Listing sorts newest first
        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(
                IndexOptions::builder()
                    .name("created_at_desc".to_string())
                    .build(),
            )
            .build();

        self.collection(TODOS_COLLECTION)
            .create_index(created_at_index, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create created_at index on todos collection: {}", e);
                AppError::from(e)
            })?;
        tracing::info!("Created index on todos.created_at");

        Ok(())
    }

    fn collection(&self, name: &str) -> Collection<Document> {
        self.db.collection(name)
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}

#[async_trait]
impl RecordStore for MongoStore {
    async fn insert(&self, collection: &str, record: Document) -> Result<(), AppError> {
        self.collection(collection)
            .insert_one(record, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to insert into {}: {}", collection, e);
                AppError::from(e)
            })?;
        Ok(())
    }

    async fn find_all(&self, collection: &str, query: FindAll) -> Result<Vec<Document>, AppError> {
        let options = FindOptions::builder()
            .sort(query.sort)
            .limit(query.limit)
            .build();

        let cursor = self
            .collection(collection)
            .find(None, options)
            .await
            .map_err(AppError::from)?;

        cursor.try_collect().await.map_err(AppError::from)
    }

    async fn find_one(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<Option<Document>, AppError> {
        self.collection(collection)
            .find_one(filter, None)
            .await
            .map_err(AppError::from)
    }

    async fn update_fields(
        &self,
        collection: &str,
        filter: Document,
        fields: Document,
    ) -> Result<u64, AppError> {
        if fields.is_empty() {
            // `$set: {}` is rejected by older servers; nothing to write anyway.
            return self
                .collection(collection)
                .count_documents(filter, None)
                .await
                .map(|count| count.min(1))
                .map_err(AppError::from);
        }

        let result = self
            .collection(collection)
            .update_one(filter, doc! { "$set": fields }, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update {}: {}", collection, e);
                AppError::from(e)
            })?;
        Ok(result.matched_count)
    }

    async fn delete_one(&self, collection: &str, filter: Document) -> Result<u64, AppError> {
        let result = self
            .collection(collection)
            .delete_one(filter, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete from {}: {}", collection, e);
                AppError::from(e)
            })?;
        Ok(result.deleted_count)
    }

    async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    async fn close(&self) {
        if self.closed.swap(true, Ordering::SeqCst) {
            return;
        }
        tracing::info!("Closing MongoDB connection");
        self.client.clone().shutdown().await;
    }
}
