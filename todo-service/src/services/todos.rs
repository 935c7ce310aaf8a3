use crate::models::todo::{id_filter, TODOS_COLLECTION};
use crate::models::{Todo, TodoPatch};
use crate::services::store::{decode, encode, FindAll, RecordStore, LIST_LIMIT};
use metrics::counter;
use mongodb::bson::doc;
use service_core::error::AppError;
use std::sync::Arc;

/// Todo lifecycle operations over an injected record store.
#[derive(Clone)]
pub struct TodoService {
    store: Arc<dyn RecordStore>,
}

impl TodoService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub async fn create_todo(&self, text: String) -> Result<Todo, AppError> {
        let todo = Todo::new(text);
        self.store.insert(TODOS_COLLECTION, encode(&todo)?).await?;

        counter!("todos_created_total").increment(1);
        tracing::info!(todo_id = %todo.id, "Todo created");
        Ok(todo)
    }

    /// Newest first, capped at [`LIST_LIMIT`]. Fails on the first record that
    /// does not decode.
    pub async fn list_todos(&self) -> Result<Vec<Todo>, AppError> {
        let records = self
            .store
            .find_all(
                TODOS_COLLECTION,
                FindAll {
                    sort: Some(doc! { "created_at": -1 }),
                    limit: Some(LIST_LIMIT),
                },
            )
            .await?;

        records
            .into_iter()
            .map(|record| decode(TODOS_COLLECTION, record))
            .collect()
    }

    /// Applies `patch` and returns the re-read todo, or `None` when no todo with
    /// `id` exists at read-back time.
    ///
    /// The write and the read-back are separate store calls; a delete landing
    /// between them makes this report `None` even though the write matched.
    pub async fn update_todo(&self, id: &str, patch: TodoPatch) -> Result<Option<Todo>, AppError> {
        let matched = self
            .store
            .update_fields(TODOS_COLLECTION, id_filter(id), patch.field_set())
            .await?;
        tracing::debug!(todo_id = %id, matched, empty_patch = patch.is_empty(), "Todo update applied");

        let updated = self
            .store
            .find_one(TODOS_COLLECTION, id_filter(id))
            .await?
            .map(|record| decode::<Todo>(TODOS_COLLECTION, record))
            .transpose()?;

        match &updated {
            Some(_) => {
                counter!("todos_updated_total").increment(1);
                tracing::info!(todo_id = %id, "Todo updated");
            }
            None => tracing::info!(todo_id = %id, "Todo update target not found"),
        }
        Ok(updated)
    }

    /// Returns whether a todo was removed. Unknown ids are not an error.
    pub async fn delete_todo(&self, id: &str) -> Result<bool, AppError> {
        let deleted = self.store.delete_one(TODOS_COLLECTION, id_filter(id)).await? > 0;

        if deleted {
            counter!("todos_deleted_total").increment(1);
        }
        tracing::info!(todo_id = %id, deleted, "Todo delete processed");
        Ok(deleted)
    }
}
