//! HTTP surface of the M&A classifier demo: the pages, the sample catalog,
//! and the JSON endpoints the pages call. All classification happens behind
//! the remote service wrapped by `classifier-client`.

use std::{env, sync::Arc};

pub mod catalog;
pub mod error_handler;
pub mod render;

mod core;
mod middleware_layer;
mod routes;

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tokio::signal;

pub use crate::core::app_state::AppState;
use crate::error_handler::{AppError, AppResult};
use crate::routes::classify::classify_pdf_route::MAX_UPLOAD_BYTES;

/// Builds the demo application router around the given state.
///
/// Separate from [`start`] so tests can drive the router directly.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(routes::pages::intro_page_route::intro_page))
        .route("/demo", get(routes::pages::demo_page_route::demo_page))
        .route(
            "/assets/app.css",
            get(routes::pages::stylesheet_route::stylesheet),
        )
        .route("/health", get(routes::health_route::health))
        .route(
            "/api/samples",
            get(routes::samples::sample_catalog_route::list_samples),
        )
        .route(
            "/api/classify/text",
            post(routes::classify::classify_text_route::classify_text),
        )
        .route(
            "/api/classify/pdf",
            post(routes::classify::classify_pdf_route::classify_pdf),
        )
        .layer(middleware::from_fn(
            middleware_layer::json_extractor::json_error_mapper,
        ))
        .layer(axum::extract::DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}

/// Binds the listener and serves the demo until Ctrl+C.
pub async fn start() -> AppResult<()> {
    let state = Arc::new(AppState::from_env()?);
    tracing::info!(endpoint = %state.classifier.endpoint(), "classifier endpoint configured");

    let host_url = env::var("API_ADDRESS").unwrap_or_else(|_| "127.0.0.1:8080".into());

    let listener = tokio::net::TcpListener::bind(&host_url)
        .await
        .map_err(AppError::Bind)?;
    tracing::info!("demo UI listening on http://{host_url}");

    // Start server with graceful shutdown on Ctrl+C
    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Server)?;

    Ok(())
}

/// Returns a future that resolves when Ctrl+C is pressed
async fn shutdown_signal() {
    signal::ctrl_c()
        .await
        .expect("Failed to listen for shutdown signal");
}
