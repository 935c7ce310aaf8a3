use chrono::{DateTime, SubsecRound, Utc};
use mongodb::bson::{doc, Document};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const TODOS_COLLECTION: &str = "todos";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Todo {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

impl Todo {
    pub fn new(text: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text,
            completed: false,
            // BSON datetimes carry milliseconds only.
            created_at: Utc::now().trunc_subsecs(3),
        }
    }
}

/// Sparse update: `None` leaves the stored field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoPatch {
    pub text: Option<String>,
    pub completed: Option<bool>,
}

impl TodoPatch {
    /// The `$set` operand for this patch; empty when no field is present.
    pub fn field_set(&self) -> Document {
        let mut fields = Document::new();
        if let Some(text) = &self.text {
            fields.insert("text", text.as_str());
        }
        if let Some(completed) = self.completed {
            fields.insert("completed", completed);
        }
        fields
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.completed.is_none()
    }
}

pub fn id_filter(id: &str) -> Document {
    doc! { "id": id }
}
