//! HTTP Routes
//!
//! - `/` - Static search page
//! - `/search` - Search proxy returning `{title, link, snippet}` items
//! - `/api/health` - Health check

pub mod health;
pub mod search;
pub mod ui;

use axum::Router;
use tower_http::trace::TraceLayer;
use crate::middleware::apply_cors;
use crate::models::AppState;
use tracing::info;

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    info!("Creating application router");

    let router = Router::new()
        .merge(search::router(state.clone()))
        .merge(health::router(state.clone()))
        .merge(ui::router());

    apply_cors(router, &state.config.server.cors_allowed_origins)
        .layer(TraceLayer::new_for_http())
}
