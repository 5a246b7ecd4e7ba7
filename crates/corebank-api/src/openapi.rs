//! OpenAPI documentation

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::dto;
use crate::error::ErrorResponse;
use crate::handlers;

/// CoreBank API documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "CoreBank API",
        description = "Banking API with token-based authentication, owner-scoped account access, money transfers and one-time transaction codes.",
        version = "0.1.0",
        license(
            name = "Apache-2.0",
            url = "https://www.apache.org/licenses/LICENSE-2.0"
        )
    ),
    paths(
        handlers::health::health_check,
        handlers::auth::login,
        handlers::auth::info,
        handlers::account::get_account,
        handlers::account::get_account_holder,
        handlers::account::transfer,
        handlers::account::transaction_code,
    ),
    components(
        schemas(
            ErrorResponse,
            handlers::health::HealthResponse,
            dto::LoginRequest,
            dto::LoginResponse,
            dto::UserResponse,
            dto::BankAccountResponse,
            dto::TransferModel,
            dto::TransferResponse,
            dto::TransactionCodeResponse,
        )
    ),
    tags(
        (name = "Health", description = "Service health"),
        (name = "Identity", description = "Login and profile"),
        (name = "Accounts", description = "Owner-scoped account operations")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

/// Registers the bearer scheme the `/api` routes require
pub struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = &mut openapi.components {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
