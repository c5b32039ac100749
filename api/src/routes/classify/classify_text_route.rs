//! POST /api/classify/text — classifies pasted announcement text.

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode, response::Response};
use tracing::{info, instrument};

use crate::{
    core::{app_state::AppState, http::response_envelope::ApiResponse},
    error_handler::{AppError, AppResult},
    render::render_verdict,
    routes::classify::classify_request::ClassifyTextRequest,
};

/// Handler: POST /api/classify/text
///
/// # Example
/// ```bash
/// curl -X POST http://127.0.0.1:8080/api/classify/text \
///   -H 'content-type: application/json' \
///   -d '{"title":"ABC Corp - Proposed Acquisition of XYZ Ltd","text":"..."}'
/// ```
#[instrument(name = "classify_text_route", skip_all)]
pub async fn classify_text(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ClassifyTextRequest>,
) -> AppResult<Response> {
    // Validation happens before any network call.
    if body.title.trim().is_empty() || body.text.trim().is_empty() {
        let field = if body.title.trim().is_empty() {
            "title"
        } else {
            "text"
        };
        return Err(AppError::Validation {
            field,
            message: "Please provide both title and text",
        });
    }

    info!(title = %body.title, "classifying announcement text");

    // Title and text go out exactly as submitted.
    let verdict = state
        .classifier
        .classify_text(&body.title, &body.text)
        .await?;

    let view = render_verdict(&verdict);
    Ok(ApiResponse::success(view).into_response_with_status(StatusCode::OK))
}
