//! GET /health — local liveness snapshot.

use std::sync::Arc;

use axum::{Json, extract::State};
use serde::Serialize;

use crate::core::app_state::AppState;

/// What the process reports about itself. The remote classifier is not
/// probed; its only contract is the classify POST.
#[derive(Debug, Serialize)]
pub struct HealthInfo {
    pub name: &'static str,
    pub version: &'static str,
    /// Endpoint the classifier client is configured against.
    pub endpoint: String,
}

pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthInfo> {
    Json(HealthInfo {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        endpoint: state.classifier.endpoint().to_string(),
    })
}
