pub mod database;
pub mod memory;
pub mod metrics;
pub mod status_checks;
pub mod store;
pub mod todos;

pub use database::MongoStore;
pub use memory::MemoryStore;
pub use metrics::{get_metrics, init_metrics};
pub use status_checks::StatusCheckService;
pub use store::{FindAll, RecordStore, LIST_LIMIT};
pub use todos::TodoService;
