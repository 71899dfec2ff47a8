//! HTTP layer: routing and error-to-status mapping

use anyhow::Result;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::error::PostError;
use crate::registry::PostRegistry;
use crate::templates::TemplateRenderer;

/// Shared state handed to every request handler.
pub struct AppState {
    pub registry: PostRegistry,
    pub templates: TemplateRenderer,
}

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/posts/:slug", get(show_post))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind the listener and serve until the process is stopped.
///
/// Called only after startup loading has completed, so no request ever
/// observes a partially built registry.
pub async fn start(state: Arc<AppState>, ip: &str, port: u16) -> Result<()> {
    let app = router(state);

    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("listening on http://{}:{}", ip, port);
    axum::serve(listener, app).await?;

    Ok(())
}

/// `GET /` - index listing with title, slug link and author per post.
async fn index(State(state): State<Arc<AppState>>) -> Response {
    match state.templates.render_index(state.registry.listing()) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("failed to render index: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
        }
    }
}

/// `GET /posts/:slug` - lazily rendered post page.
async fn show_post(Path(slug): Path<String>, State(state): State<Arc<AppState>>) -> Response {
    let result = state
        .registry
        .get_rendered(&slug)
        .and_then(|post| state.templates.render_post(&post));

    match result {
        Ok(html) => Html(html).into_response(),
        Err(PostError::NotFound) => {
            (StatusCode::NOT_FOUND, "Post not found").into_response()
        }
        Err(e) => {
            tracing::error!("failed to render post {}: {}", slug, e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Could not render post").into_response()
        }
    }
}
