pub mod status_check;
pub mod todo;

pub use status_check::StatusCheck;
pub use todo::{Todo, TodoPatch};
