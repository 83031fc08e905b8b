//! Router configuration for the HTTP API.
//!
//! Sets up routes and middleware (CORS, tracing) and returns the axum
//! router ready for serving.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;

/// Create the application router with all routes and middleware.
pub fn create_router() -> Router {
    // The frontend is served from a different origin, so CORS stays open.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/units", get(handlers::list_units))
        .route("/convert/{category}", post(handlers::convert));

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
