use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use pairdiff_store::PairStore;

use crate::config::ServerConfig;
use crate::handler::{self, AppState};

/// Build the axum router with all pairdiff endpoints, backed by `store`.
pub fn build_router(store: Arc<dyn PairStore>, config: &ServerConfig) -> Router {
    Router::new()
        .route("/v1/diff/:id/left", post(handler::submit_left))
        .route("/v1/diff/:id/right", post(handler::submit_right))
        .route("/v1/diff/:id", get(handler::get_diff))
        .route("/v1/health", get(handler::health_handler))
        .route("/v1/info", get(handler::info_handler))
        .layer(DefaultBodyLimit::max(config.max_body_size))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState::new(store))
}
