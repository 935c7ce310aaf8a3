pub mod status;
pub mod todos;

pub use status::{CreateStatusCheckRequest, MessageResponse, StatusCheckResponse};
pub use todos::{CreateTodoRequest, DeleteTodoResponse, TodoResponse, UpdateTodoRequest};

use chrono::{DateTime, SecondsFormat, Utc};

/// ISO-8601 UTC with millisecond precision, e.g. `2024-05-01T12:00:00.123Z`.
pub(crate) fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}
