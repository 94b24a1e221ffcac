// HTTP routes configuration

use super::handlers::{health_handler, metrics_handler, translate_handler};
use super::middleware::{request_id_layers, track_metrics};
use crate::config::AppConfig;
use crate::error::Result;
use crate::pipeline::TranslationPipeline;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub pipeline: Arc<TranslationPipeline>,
}

pub fn create_router(config: AppConfig, pipeline: TranslationPipeline) -> Result<Router> {
    let state = AppState {
        config,
        pipeline: Arc::new(pipeline),
    };

    let (set_request_id, propagate_request_id) = request_id_layers();

    let app = Router::new()
        .route("/translate", post(translate_handler))
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        // Text-only payloads; 1MB is ample for a translation request
        .layer(tower_http::limit::RequestBodyLimitLayer::new(1024 * 1024))
        .layer(axum::middleware::from_fn(track_metrics))
        .layer(TraceLayer::new_for_http())
        .layer(propagate_request_id)
        .layer(set_request_id)
        .with_state(state);

    Ok(app)
}
