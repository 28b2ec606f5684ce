// HTTP routes configuration
// Author: kelexine (https://github.com/kelexine)

use super::handlers::{
    health_handler, languages_handler, metrics_handler, providers_handler, translate_handler,
};
use super::middleware::{request_id_layers, track_metrics};
use crate::config::AppConfig;
use crate::gateway::Gateway;
use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub gateway: Arc<Gateway>,
}

pub fn create_router(config: AppConfig, gateway: Gateway) -> Router {
    let max_body_bytes = config.performance.max_body_bytes;
    let enable_compression = config.performance.enable_compression;

    let state = AppState {
        config: Arc::new(config),
        gateway: Arc::new(gateway),
    };

    let (set_request_id, propagate_request_id) = request_id_layers();

    let app = Router::new()
        .route("/translate/:provider", post(translate_handler))
        .route("/providers", get(providers_handler))
        .route("/providers/:provider/languages", get(languages_handler))
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .route_layer(middleware::from_fn(track_metrics))
        .layer(DefaultBodyLimit::max(max_body_bytes));

    let app = if enable_compression {
        app.layer(CompressionLayer::new())
    } else {
        app
    };

    app.layer(TraceLayer::new_for_http())
        .layer(propagate_request_id)
        .layer(set_request_id)
        .with_state(state)
}
