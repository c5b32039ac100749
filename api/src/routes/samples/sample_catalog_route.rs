//! GET /api/samples — the pre-loaded announcement catalog as JSON.

use axum::{http::StatusCode, response::Response};
use serde::Serialize;

use crate::{catalog, core::http::response_envelope::ApiResponse};

/// One catalog entry as the page consumes it.
#[derive(Debug, Serialize)]
pub struct SampleItem {
    pub index: usize,
    pub title: &'static str,
    pub text: &'static str,
}

/// Handler: GET /api/samples
///
/// Returns the stored literals unmodified; the page copies them into the
/// request fields as-is.
pub async fn list_samples() -> Response {
    let items: Vec<SampleItem> = catalog::SAMPLE_ANNOUNCEMENTS
        .iter()
        .enumerate()
        .map(|(index, s)| SampleItem {
            index,
            title: s.title,
            text: s.text,
        })
        .collect();

    ApiResponse::success(items).into_response_with_status(StatusCode::OK)
}
