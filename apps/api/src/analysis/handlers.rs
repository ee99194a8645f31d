//! Axum route handlers for the Analysis API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};

use crate::analysis::models::{AnalysisRequest, AnalysisResponse};
use crate::analysis::service::analyze_code;
use crate::errors::AppError;
use crate::state::AppState;

/// POST /analise
///
/// Always answers 200 with a full `AnalysisResponse` once the body is readable.
/// Provider and parsing problems are reported inside `suggestions`.
pub async fn handle_analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalysisRequest>, JsonRejection>,
) -> Result<Json<AnalysisResponse>, AppError> {
    let Json(request) = payload?;

    let response = analyze_code(state.provider.as_deref(), &request).await;

    Ok(Json(response))
}
