//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
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
    // CORS configuration - permissive, the renderer runs on its own origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        // Navigation
        .route("/tabs", get(handlers::list_tabs))
        .route("/tab", get(handlers::get_active_tab).put(handlers::select_tab))
        // Projections
        .route("/projection", get(handlers::get_active_projection))
        .route("/projections/overview", get(handlers::get_overview))
        .route("/projections/devices", get(handlers::get_devices))
        .route("/projections/chart", get(handlers::get_chart))
        .route("/projections/alerts", get(handlers::get_alerts))
        // Data
        .route("/refresh", post(handlers::refresh));

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
