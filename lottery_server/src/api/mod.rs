//! HTTP API for the lottery draw server.
//!
//! # Endpoints Overview
//!
//! ```text
//! GET    /health                         - Server health status
//! POST   /api/v1/draws                   - Create draw from manual entries
//! POST   /api/v1/draws/upload            - Create draw from an uploaded entry file
//! GET    /api/v1/draws/{id}              - Get draw session
//! POST   /api/v1/draws/{id}/shuffle      - Freeze the draw order
//! POST   /api/v1/draws/{id}/winners      - Draw the next winner
//! GET    /api/v1/draws/{id}/export       - Download results as CSV
//! DELETE /api/v1/draws/{id}              - Reset (drop) the session
//! ```
//!
//! Errors are returned as `{"error": "..."}` with 400 for bad input, 404 for
//! unknown sessions, 409 for out-of-order calls and 503 at capacity.
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use lottery_engine::session::DrawSessionManager;
//! use lottery_server::api::{AppState, create_router};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let state = AppState {
//!     sessions: Arc::new(DrawSessionManager::default()),
//!     max_upload_bytes: 16 * 1024 * 1024,
//! };
//!
//! let app = create_router(state);
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # CORS
//!
//! CORS is configured permissively so a browser front end on another origin
//! can drive the draw.

pub mod draws;
pub mod request_id;

use axum::{
    Router,
    extract::{DefaultBodyLimit, State},
    response::{IntoResponse, Json},
    routing::{get, post},
};
use lottery_engine::session::DrawSessionManager;
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Application state shared across all HTTP handlers.
///
/// Cloned for each request; the session manager is shared behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<DrawSessionManager>,
    /// Request body cap applied to every route
    pub max_upload_bytes: usize,
}

/// Create the complete API router with all endpoints and middleware.
pub fn create_router(state: AppState) -> Router {
    let v1_routes = create_v1_router();

    Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", v1_routes)
        .layer(DefaultBodyLimit::max(state.max_upload_bytes))
        .layer(axum::middleware::from_fn(request_id::request_id_middleware))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Create API v1 router with all versioned endpoints.
fn create_v1_router() -> Router<AppState> {
    Router::new()
        .route("/draws", post(draws::create_draw))
        .route("/draws/upload", post(draws::upload_draw))
        .route(
            "/draws/{id}",
            get(draws::get_draw).delete(draws::delete_draw),
        )
        .route("/draws/{id}/shuffle", post(draws::shuffle_draw))
        .route("/draws/{id}/winners", post(draws::draw_winner))
        .route("/draws/{id}/export", get(draws::export_draw))
}

/// Health check endpoint for monitoring and load balancers.
///
/// # Example
///
/// ```bash
/// curl http://localhost:8080/health
/// # {"status":"healthy","version":"1.0.0","active_sessions":0,"timestamp":"2025-11-22T10:30:00+00:00"}
/// ```
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let active_sessions = state.sessions.session_count().await;

    Json(json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "active_sessions": active_sessions,
        "max_sessions": state.sessions.config().max_sessions,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
