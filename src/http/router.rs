//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive, the frontend is served from another origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/exoplanets/{mission}", get(handlers::get_mission_catalog))
        .route("/systems", get(handlers::get_planet_systems))
        .route("/summary", get(handlers::get_catalog_summary))
        .route("/predict", post(handlers::predict))
        .route("/predict/batch", post(handlers::predict_batch));

    Router::new()
        .route("/", get(handlers::landing))
        .route("/health", get(handlers::health_check))
        .nest("/api", api)
        // Allow large CSV uploads on the batch prediction endpoint.
        .layer(DefaultBodyLimit::max(20 * 1024 * 1024))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
