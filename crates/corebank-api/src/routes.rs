//! API routes

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use corebank_auth::{AuthLayer, TokenService};

use crate::handlers;
use crate::state::AppState;

/// Create the `/api` routes.
///
/// The auth layer covers the whole tree but never rejects on its own;
/// `/auth` stays public even when the client sends a stale bearer header,
/// and the protected routes reject through their subject extractor.
pub fn api_routes(tokens: Arc<TokenService>) -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth", post(handlers::auth::login))
        .route("/info", get(handlers::auth::info))
        .route("/account/:account_id", get(handlers::account::get_account))
        .route(
            "/account-user/:account_id",
            get(handlers::account::get_account_holder),
        )
        .route("/account-transfer", post(handlers::account::transfer))
        .route(
            "/account-code/:card_id",
            get(handlers::account::transaction_code),
        )
        .layer(AuthLayer::new(tokens))
}

/// Create Swagger UI routes
pub fn swagger_routes() -> Router<Arc<AppState>> {
    use crate::openapi::ApiDoc;
    use utoipa::OpenApi;
    use utoipa_swagger_ui::SwaggerUi;

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
