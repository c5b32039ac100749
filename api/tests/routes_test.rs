//! Router-level tests driven with `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use api::{AppState, app, catalog};
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt; // for `oneshot`

/// Nothing listens on port 9; validation must fire before any connection
/// attempt, so these tests never touch the network.
fn test_state() -> Arc<AppState> {
    Arc::new(AppState::with_endpoint("http://127.0.0.1:9/").unwrap())
}

async fn json_body(resp: axum::response::Response) -> Value {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn samples_route_returns_catalog_literals() {
    let resp = app(test_state())
        .oneshot(Request::get("/api/samples").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let v = json_body(resp).await;
    assert_eq!(v["success"], true);

    let data = v["data"].as_array().unwrap();
    assert_eq!(data.len(), catalog::SAMPLE_ANNOUNCEMENTS.len());
    for (i, item) in data.iter().enumerate() {
        assert_eq!(item["index"], i);
        assert_eq!(item["title"], catalog::SAMPLE_ANNOUNCEMENTS[i].title);
        assert_eq!(item["text"], catalog::SAMPLE_ANNOUNCEMENTS[i].text);
    }
}

#[tokio::test]
async fn blank_title_is_rejected_before_any_request() {
    let resp = app(test_state())
        .oneshot(
            Request::post("/api/classify/text")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"title":"  ","text":"some announcement"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let v = json_body(resp).await;
    assert_eq!(v["success"], false);
    assert_eq!(v["error"]["code"], "VALIDATION");
    assert_eq!(v["error"]["message"], "Please provide both title and text");
    assert_eq!(v["error"]["details"][0]["path"], "title");
}

#[tokio::test]
async fn pdf_without_title_is_rejected_before_any_request() {
    let resp = app(test_state())
        .oneshot(
            Request::post("/api/classify/pdf")
                .body(Body::from(&b"%PDF-1.4 payload"[..]))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let v = json_body(resp).await;
    assert_eq!(v["error"]["code"], "VALIDATION");
    assert_eq!(v["error"]["details"][0]["path"], "title");
}

#[tokio::test]
async fn pdf_without_body_is_rejected_before_any_request() {
    let resp = app(test_state())
        .oneshot(
            Request::post("/api/classify/pdf?title=ABC%20Corp")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let v = json_body(resp).await;
    assert_eq!(v["error"]["code"], "VALIDATION");
    assert_eq!(v["error"]["message"], "Please upload a PDF file");
}

#[tokio::test]
async fn malformed_json_body_is_mapped_into_the_envelope() {
    let resp = app(test_state())
        .oneshot(
            Request::post("/api/classify/text")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"title": 7, "text": "x"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        resp.headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok()),
        Some("application/json")
    );
    let v = json_body(resp).await;
    assert_eq!(v["success"], false);
    assert_eq!(v["error"]["code"], "UNPROCESSABLE_ENTITY");
}

#[tokio::test]
async fn pages_serve_html_chrome() {
    let resp = app(test_state())
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let page = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(page.contains("M&amp;A Transaction Classifier"));
    assert!(page.contains("/demo"));

    let resp = app(test_state())
        .oneshot(Request::get("/demo").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let page = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(page.contains("Try Sample Announcements"));
    assert!(page.contains("/api/classify/text"));
}

#[tokio::test]
async fn stylesheet_is_served_as_css() {
    let resp = app(test_state())
        .oneshot(Request::get("/assets/app.css").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok()),
        Some("text/css; charset=utf-8")
    );
}

#[tokio::test]
async fn health_reports_name_version_and_endpoint() {
    let resp = app(test_state())
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let v = json_body(resp).await;
    assert_eq!(v["name"], "api");
    assert_eq!(v["endpoint"], "http://127.0.0.1:9/");
    assert!(v["version"].is_string());
}
