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
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the API router with versioned endpoints
    let api_v1 = Router::new()
        .route("/solve", post(handlers::solve))
        .route("/courses", get(handlers::list_courses))
        .route("/courses/{code}", get(handlers::get_course))
        .route("/stats", get(handlers::get_stats));

    // Combine all routes
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::Catalogue;
    use crate::config::LimitSettings;
    use std::sync::Arc;

    #[test]
    fn test_router_creation() {
        let catalogue = Catalogue::from_json_str(
            r#"{"CS100": [{"crn": 1, "days": "M", "start": "09:00", "end": "10:00"}]}"#,
        )
        .unwrap();
        let state = AppState::new(Arc::new(catalogue), LimitSettings::default());
        let _router = create_router(state);
        // If we got here, router was created successfully
    }
}
