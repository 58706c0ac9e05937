//! Axum router configuration with middleware.
//!
//! Routes: `POST /api/chat`, `GET /health`, and a fallback serving the chat
//! page for everything else, including other methods on those two paths.
//! Any `OPTIONS` request is answered with 204 and the CORS headers before
//! routing.
//!
//! When `server.web_dir` points at an existing directory, the fallback serves
//! files from it; paths with no file get its `index.html`.

use axum::Router;
use axum::extract::{DefaultBodyLimit, Request};
use axum::handler::Handler;
use axum::http::{HeaderValue, Method, StatusCode, header};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::http::handlers::page::chat_page;
use crate::state::AppState;

const ALLOW_METHODS: &str = "GET, POST, OPTIONS";
const ALLOW_HEADERS: &str = "Content-Type";

/// Build the complete router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    let web_dir = state.web_dir.clone().filter(|dir| dir.is_dir());
    let page = chat_page.with_state(state.clone());

    let mut router = Router::new()
        .route(
            "/api/chat",
            post(handlers::chat::chat)
                .fallback(chat_page)
                .layer(DefaultBodyLimit::max(state.max_body_bytes)),
        )
        .route("/health", get(health_check).fallback(chat_page))
        .with_state(state);

    router = match web_dir {
        Some(dir) => {
            tracing::info!(path = %dir.display(), "Static file serving enabled");
            let serve_dir = ServeDir::new(&dir)
                .call_fallback_on_method_not_allowed(true)
                .fallback(page);
            router.fallback_service(serve_dir)
        }
        None => router.fallback_service(page),
    };

    router
        .layer(cors)
        .layer(middleware::from_fn(preflight))
        .layer(TraceLayer::new_for_http())
}

/// Answer every `OPTIONS` request with 204 and the CORS headers.
async fn preflight(request: Request, next: Next) -> Response {
    if request.method() != Method::OPTIONS {
        return next.run(request).await;
    }

    let mut response = StatusCode::NO_CONTENT.into_response();
    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOW_METHODS),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOW_HEADERS),
    );
    response
}

/// GET /health - liveness probe.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
