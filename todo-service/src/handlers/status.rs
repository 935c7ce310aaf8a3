use crate::dtos::{CreateStatusCheckRequest, MessageResponse, StatusCheckResponse};
use crate::startup::AppState;
use axum::{extract::State, Json};
use service_core::error::AppError;
use service_core::utils::JsonBody;

pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Hello World".to_string(),
    })
}

#[tracing::instrument(skip(state, request))]
pub async fn create_status_check(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateStatusCheckRequest>,
) -> Result<Json<StatusCheckResponse>, AppError> {
    let check = state
        .status_checks
        .create_status_check(request.client_name)
        .await?;
    Ok(Json(check.into()))
}

#[tracing::instrument(skip(state))]
pub async fn list_status_checks(
    State(state): State<AppState>,
) -> Result<Json<Vec<StatusCheckResponse>>, AppError> {
    let checks = state.status_checks.list_status_checks().await?;
    Ok(Json(checks.into_iter().map(Into::into).collect()))
}
