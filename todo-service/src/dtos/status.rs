use crate::models::StatusCheck;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CreateStatusCheckRequest {
    pub client_name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatusCheckResponse {
    pub id: String,
    pub client_name: String,
    pub timestamp: String,
}

impl From<StatusCheck> for StatusCheckResponse {
    fn from(check: StatusCheck) -> Self {
        Self {
            timestamp: super::format_timestamp(&check.timestamp),
            id: check.id,
            client_name: check.client_name,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
