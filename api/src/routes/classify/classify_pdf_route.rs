//! POST /api/classify/pdf — classifies an uploaded PDF announcement.
//!
//! The page posts the raw document bytes as the request body with the
//! headline in the `title` query parameter; base64 encoding happens in the
//! classifier client, not in the browser.

use std::io::Cursor;
use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    response::Response,
};
use tracing::{info, instrument};

use crate::{
    core::{app_state::AppState, http::response_envelope::ApiResponse},
    error_handler::{AppError, AppResult},
    render::render_verdict,
    routes::classify::classify_request::ClassifyPdfParams,
};

/// Transport cap on uploads, comfortably above the advertised 7 MB maximum.
/// Whether the remote service accepts payloads near this size is its own
/// contract.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Handler: POST /api/classify/pdf?title=...
#[instrument(name = "classify_pdf_route", skip_all)]
pub async fn classify_pdf(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ClassifyPdfParams>,
    body: Bytes,
) -> AppResult<Response> {
    // Validation happens before any network call.
    if params.title.trim().is_empty() {
        return Err(AppError::Validation {
            field: "title",
            message: "Please provide an announcement title",
        });
    }
    if body.is_empty() {
        return Err(AppError::Validation {
            field: "file",
            message: "Please upload a PDF file",
        });
    }

    info!(title = %params.title, bytes = body.len(), "classifying uploaded PDF");

    // The upload stays resident here; the client reads it fully and
    // restores the read position so a re-submission reuses the same bytes.
    let mut upload = Cursor::new(body.as_ref());
    let verdict = state
        .classifier
        .classify_pdf(&params.title, &mut upload)
        .await?;

    let view = render_verdict(&verdict);
    Ok(ApiResponse::success(view).into_response_with_status(StatusCode::OK))
}
