use super::handlers;
use super::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Create the HTTP router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Service info
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        // Interview flow
        .route("/api/profiles", get(handlers::list_profiles))
        .route("/api/interview/start", post(handlers::start_interview))
        .route("/api/interview/message", post(handlers::send_message))
        .route("/api/interview/evaluate", post(handlers::evaluate))
        // Speech
        .route("/api/transcribe", post(handlers::transcribe))
        .route("/api/synthesize", post(handlers::synthesize))
        // Session queries
        .route(
            "/api/session/:session_id",
            get(handlers::get_session).delete(handlers::delete_session),
        )
        // Configuration echo
        .route("/api/config", get(handlers::get_config))
        // The browser frontend is served from a different origin
        .layer(CorsLayer::permissive())
        // Add tracing middleware for request logging
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
