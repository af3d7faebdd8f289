//! Axum route handlers for the Generation API.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, Method, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::AppError;
use crate::generation::gateway::GenerationRequest;
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub post: String,
}

/// POST /api/generate
///
/// Body: `{ goal, inputs, tone }`. Returns `{ post }` or `{ error }`.
pub async fn handle_generate(
    State(state): State<AppState>,
    body: Result<Json<GenerationRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, AppError> {
    let Json(request) = body.map_err(|rejection| {
        warn!("Rejected generate body: {}", rejection.body_text());
        AppError::Validation(format!("Invalid request body: {}", rejection.body_text()))
    })?;

    let post = state.gateway.generate(request).await?;

    Ok(Json(GenerateResponse { post }))
}

/// Any non-POST method on /api/generate.
pub async fn handle_method_not_allowed(method: Method) -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, "POST")],
        format!("Method {method} Not Allowed"),
    )
}
