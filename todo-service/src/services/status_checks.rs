use crate::models::status_check::STATUS_CHECKS_COLLECTION;
use crate::models::StatusCheck;
use crate::services::store::{decode, encode, FindAll, RecordStore, LIST_LIMIT};
use metrics::counter;
use service_core::error::AppError;
use std::sync::Arc;

#[derive(Clone)]
pub struct StatusCheckService {
    store: Arc<dyn RecordStore>,
}

impl StatusCheckService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub async fn create_status_check(&self, client_name: String) -> Result<StatusCheck, AppError> {
        let check = StatusCheck::new(client_name);
        self.store
            .insert(STATUS_CHECKS_COLLECTION, encode(&check)?)
            .await?;

        counter!("status_checks_created_total").increment(1);
        tracing::info!(status_check_id = %check.id, client_name = %check.client_name, "Status check recorded");
        Ok(check)
    }

    /// Store natural order, capped at [`LIST_LIMIT`].
    pub async fn list_status_checks(&self) -> Result<Vec<StatusCheck>, AppError> {
        let records = self
            .store
            .find_all(
                STATUS_CHECKS_COLLECTION,
                FindAll {
                    sort: None,
                    limit: Some(LIST_LIMIT),
                },
            )
            .await?;

        records
            .into_iter()
            .map(|record| decode(STATUS_CHECKS_COLLECTION, record))
            .collect()
    }
}
