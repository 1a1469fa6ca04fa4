pub mod cards;
pub mod sessions;

use axum::response::Html;

/// GET /
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}
