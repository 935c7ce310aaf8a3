pub mod health;
pub mod status;
pub mod todos;

pub use health::{health_check, metrics_endpoint, readiness_check};
pub use status::{create_status_check, list_status_checks, root};
pub use todos::{create_todo, delete_todo, list_todos, update_todo};
