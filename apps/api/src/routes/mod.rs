pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::roadmap::handlers;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/roadmap", post(handlers::handle_generate_roadmap))
        .route(
            "/api/v1/roadmap/analyze",
            post(handlers::handle_analyze_goal),
        )
        .fallback(not_found)
        .with_state(state)
}
