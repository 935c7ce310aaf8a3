use crate::models::{Todo, TodoPatch};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    pub text: String,
}

/// Both fields are optional; JSON `null` is treated the same as absent.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateTodoRequest {
    pub text: Option<String>,
    pub completed: Option<bool>,
}

impl From<UpdateTodoRequest> for TodoPatch {
    fn from(req: UpdateTodoRequest) -> Self {
        TodoPatch {
            text: req.text,
            completed: req.completed,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TodoResponse {
    pub id: String,
    pub text: String,
    pub completed: bool,
    pub created_at: String,
}

impl From<Todo> for TodoResponse {
    fn from(todo: Todo) -> Self {
        Self {
            created_at: super::format_timestamp(&todo.created_at),
            id: todo.id,
            text: todo.text,
            completed: todo.completed,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteTodoResponse {
    pub deleted: bool,
}
