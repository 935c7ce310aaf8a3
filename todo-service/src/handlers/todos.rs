use crate::dtos::{CreateTodoRequest, DeleteTodoResponse, TodoResponse, UpdateTodoRequest};
use crate::startup::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use service_core::error::AppError;
use service_core::utils::JsonBody;

#[tracing::instrument(skip(state, request))]
pub async fn create_todo(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateTodoRequest>,
) -> Result<Json<TodoResponse>, AppError> {
    let todo = state.todos.create_todo(request.text).await?;
    Ok(Json(todo.into()))
}

#[tracing::instrument(skip(state))]
pub async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<TodoResponse>>, AppError> {
    let todos = state.todos.list_todos().await?;
    Ok(Json(todos.into_iter().map(Into::into).collect()))
}

#[tracing::instrument(skip(state, request))]
pub async fn update_todo(
    State(state): State<AppState>,
    Path(todo_id): Path<String>,
    JsonBody(request): JsonBody<UpdateTodoRequest>,
) -> Result<Json<TodoResponse>, AppError> {
    let todo = state
        .todos
        .update_todo(&todo_id, request.into())
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Todo {} not found", todo_id)))?;
    Ok(Json(todo.into()))
}

#[tracing::instrument(skip(state))]
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(todo_id): Path<String>,
) -> Result<Json<DeleteTodoResponse>, AppError> {
    let deleted = state.todos.delete_todo(&todo_id).await?;
    Ok(Json(DeleteTodoResponse { deleted }))
}
