//! Page endpoints.

use axum::response::Html;

/// GET / - The note-taking page. Embedded at build time; its assets are
/// served from the static directory.
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}
