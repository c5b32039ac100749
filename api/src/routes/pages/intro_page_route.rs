//! GET / — introduction page: problem statement, solution overview, and
//! classification criteria. Pure chrome; nothing here talks to the network.

use axum::response::Html;

pub async fn intro_page() -> Html<&'static str> {
    Html(include_str!("../../assets/intro.html"))
}
