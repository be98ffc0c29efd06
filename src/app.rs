use axum::{routing::get, Router};
use std::path::Path;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::game::SessionHandle;
use crate::ws;

/// Game socket at `/ws`, everything else served from `static_dir`
pub fn router(session: SessionHandle, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/ws", get(ws::ws_handler))
        .fallback_service(ServeDir::new(static_dir))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(session)
}
