//! The single-page chat interface, served for every unmatched route.

use std::borrow::Cow;

use axum::extract::State;
use axum::response::Html;

use crate::state::AppState;

/// Chat page compiled into the binary.
pub const CHAT_PAGE: &str = include_str!("../../../static/index.html");

/// Fallback handler: any route or method not otherwise matched gets the page.
///
/// With a web directory configured, its `index.html` is served; if it cannot
/// be read the embedded page is used.
pub async fn chat_page(State(state): State<AppState>) -> Html<Cow<'static, str>> {
    let Some(dir) = state.web_dir.as_deref() else {
        return Html(Cow::Borrowed(CHAT_PAGE));
    };

    let index = dir.join("index.html");
    match tokio::fs::read_to_string(&index).await {
        Ok(html) => Html(Cow::Owned(html)),
        Err(err) => {
            tracing::debug!(path = %index.display(), error = %err, "Falling back to embedded page");
            Html(Cow::Borrowed(CHAT_PAGE))
        }
    }
}
