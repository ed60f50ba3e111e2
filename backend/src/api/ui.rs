//! Browser UI
//!
//! A single page plus its script, compiled into the binary.

use axum::{
    http::header,
    response::{Html, IntoResponse},
};

const INDEX_HTML: &str = include_str!("../../static/index.html");
const SCRIPT_JS: &str = include_str!("../../static/script.js");

/// GET / - Song browser page
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /static/script.js - Song browser script
pub async fn script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        SCRIPT_JS,
    )
}
