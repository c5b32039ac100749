//! GET /demo — the interactive demo: text input, PDF upload, and sample
//! announcements. The page script calls the /api/classify endpoints and
//! displays the rendered verdict structure they return.

use axum::response::Html;

pub async fn demo_page() -> Html<&'static str> {
    Html(include_str!("../../assets/demo.html"))
}
