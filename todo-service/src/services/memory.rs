//! In-process record store for tests; the binary always runs against MongoDB.
//!
//! Collections keep insertion order, which stands in for the natural order of
//! a real document store. Filters support top-level equality only.

use crate::services::store::{FindAll, RecordStore};
use async_trait::async_trait;
use mongodb::bson::{Bson, Document};
use service_core::error::AppError;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct MemoryStore {
    collections: Arc<RwLock<HashMap<String, Vec<Document>>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn matches(record: &Document, filter: &Document) -> bool {
    filter
        .iter()
        .all(|(key, expected)| record.get(key) == Some(expected))
}

fn compare_bson(a: Option<&Bson>, b: Option<&Bson>) -> Ordering {
    match (a, b) {
        (Some(Bson::DateTime(a)), Some(Bson::DateTime(b))) => a.cmp(b),
        (Some(Bson::String(a)), Some(Bson::String(b))) => a.cmp(b),
        (Some(Bson::Int32(a)), Some(Bson::Int32(b))) => a.cmp(b),
        (Some(Bson::Int64(a)), Some(Bson::Int64(b))) => a.cmp(b),
        (Some(Bson::Double(a)), Some(Bson::Double(b))) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
        (Some(Bson::Boolean(a)), Some(Bson::Boolean(b))) => a.cmp(b),
        // Missing values sort first, as in MongoDB ascending order.
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        _ => Ordering::Equal,
    }
}

fn sort_records(records: &mut [Document], sort: &Document) {
    // Vec::sort_by is stable, so ties keep insertion order.
    records.sort_by(|a, b| {
        for (key, direction) in sort {
            let descending = match direction {
                Bson::Int32(d) => *d < 0,
                Bson::Int64(d) => *d < 0,
                _ => false,
            };
            let ord = compare_bson(a.get(key), b.get(key));
            let ord = if descending { ord.reverse() } else { ord };
            if ord != Ordering::Equal {
                return ord;
            }
        }
        Ordering::Equal
    });
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn insert(&self, collection: &str, record: Document) -> Result<(), AppError> {
        let mut collections = self.collections.write().await;
        collections
            .entry(collection.to_string())
            .or_default()
            .push(record);
        Ok(())
    }

    async fn find_all(&self, collection: &str, query: FindAll) -> Result<Vec<Document>, AppError> {
        let collections = self.collections.read().await;
        let mut records = collections.get(collection).cloned().unwrap_or_default();

        if let Some(sort) = &query.sort {
            sort_records(&mut records, sort);
        }
        if let Some(limit) = query.limit.filter(|l| *l > 0) {
            records.truncate(limit as usize);
        }
        Ok(records)
    }

    async fn find_one(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<Option<Document>, AppError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|records| records.iter().find(|r| matches(r, &filter)))
            .cloned())
    }

    async fn update_fields(
        &self,
        collection: &str,
        filter: Document,
        fields: Document,
    ) -> Result<u64, AppError> {
        let mut collections = self.collections.write().await;
        let Some(record) = collections
            .get_mut(collection)
            .and_then(|records| records.iter_mut().find(|r| matches(r, &filter)))
        else {
            return Ok(0);
        };

        for (key, value) in fields {
            record.insert(key, value);
        }
        Ok(1)
    }

    async fn delete_one(&self, collection: &str, filter: Document) -> Result<u64, AppError> {
        let mut collections = self.collections.write().await;
        let Some(records) = collections.get_mut(collection) else {
            return Ok(0);
        };

        match records.iter().position(|r| matches(r, &filter)) {
            Some(index) => {
                records.remove(index);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn health_check(&self) -> Result<(), AppError> {
        Ok(())
    }

    async fn close(&self) {}
}
