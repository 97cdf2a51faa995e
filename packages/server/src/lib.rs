//! Trivia API HTTP server
//!
//! A small JSON-over-HTTP surface for trivia questions and categories,
//! backed by [`trivia_core`].
//!
//! # Architecture
//!
//! The server is organized into per-resource endpoint modules, each
//! exposing a `routes(state)` router merged into the application router:
//!
//! - `category_endpoints`: GET /categories, GET /categories/:id/questions
//! - `question_endpoints`: GET/POST /questions, DELETE /questions/:id
//! - `quiz_endpoints`: POST /quizzes
//!
//! Handlers orchestrate store queries, pagination, and quiz selection into
//! the response shapes; they hold no state across requests.

use axum::{
    http::{header, Method},
    response::Json,
    routing::get,
    Router,
};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};

use trivia_core::QuestionStore;

pub mod category_endpoints;
pub mod http_error;
pub mod question_endpoints;
pub mod quiz_endpoints;

pub use http_error::ApiError;

/// Application state shared across all endpoints
///
/// Holds the injected store handle; the underlying database connection is
/// opened once at process start and shared.
#[derive(Clone)]
pub struct AppState {
    pub store: QuestionStore,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
}

/// Health check endpoint
///
/// Returns server status and version; no store access.
async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Create the main application router with all endpoint modules
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .merge(category_endpoints::routes(state.clone()))
        .merge(question_endpoints::routes(state.clone()))
        .merge(quiz_endpoints::routes(state))
        .layer(cors_layer())
}

/// Create the CORS layer
///
/// The API serves browser frontends from arbitrary origins, so any origin
/// is allowed with the standard content-type and authorization headers.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::PUT,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

/// Start the HTTP server
///
/// # Errors
///
/// Returns an error if the listener fails to bind or the server fails to
/// start.
pub async fn start_server(store: QuestionStore, port: u16) -> anyhow::Result<()> {
    let state = AppState { store };
    let app = create_router(state);

    let addr = format!("127.0.0.1:{}", port);
    tracing::info!("🚀 Trivia API listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
