//! CoreBank REST API
//!
//! The HTTP boundary over the owner-scoped banking services.
//!
//! # API Structure
//!
//! ```text
//! /api
//! ├── POST /auth                      - login, issues a bearer token
//! ├── GET  /info                      - authenticated user's profile
//! ├── GET  /account/{accountId}       - owner-scoped account lookup
//! ├── GET  /account-user/{accountId}  - owner-scoped holder lookup
//! ├── POST /account-transfer          - money transfer
//! └── GET  /account-code/{cardId}     - one-time transaction code
//! /health                             - liveness
//! /swagger-ui                         - OpenAPI documentation
//! ```
//!
//! Every `/api` route except `/auth` requires a bearer token; failures
//! surface as `401 {"message": "Invalid token"}`. Rejected operations
//! return the same coarse message regardless of which guard fired, so
//! responses never reveal whether an account id is live or who holds it.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::Router;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub use error::{ApiError, ApiResult};
pub use state::AppState;

/// API configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Enable CORS for browser clients
    pub enable_cors: bool,
    /// Allowed origins for CORS
    pub cors_origins: Vec<String>,
    /// Enable request tracing
    pub enable_tracing: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            enable_cors: true,
            cors_origins: vec!["*".to_string()],
            enable_tracing: true,
        }
    }
}

/// Create the main API router with all middleware
pub fn create_router(state: Arc<AppState>, config: ApiConfig) -> Router {
    let mut router = Router::new()
        .nest("/api", routes::api_routes(state.tokens.clone()))
        .route("/health", axum::routing::get(handlers::health::health_check))
        .merge(routes::swagger_routes())
        .with_state(state);

    if config.enable_tracing {
        router = router.layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        );
    }

    if config.enable_cors {
        let cors = if config.cors_origins.contains(&"*".to_string()) {
            CorsLayer::permissive()
        } else {
            CorsLayer::new()
                .allow_origin(
                    config
                        .cors_origins
                        .iter()
                        .filter_map(|o| o.parse().ok())
                        .collect::<Vec<_>>(),
                )
                .allow_methods([axum::http::Method::GET, axum::http::Method::POST])
                .allow_headers(Any)
        };
        router = router.layer(cors);
    }

    router
}

/// Create a minimal router for testing
pub fn create_test_router(state: Arc<AppState>) -> Router {
    Router::new()
        .nest("/api", routes::api_routes(state.tokens.clone()))
        .route("/health", axum::routing::get(handlers::health::health_check))
        .with_state(state)
}
