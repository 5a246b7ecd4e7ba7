//! Login and profile handlers

use axum::{extract::State, Json};
use std::sync::Arc;
use validator::Validate;

use corebank_auth::CurrentSubject;
use corebank_store::StoreError;

use crate::dto::{LoginRequest, LoginResponse, UserResponse};
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Log in with username and password, receiving a bearer token.
///
/// An unknown username and a wrong password produce the same response, so
/// the endpoint cannot be used to probe which usernames exist.
#[utoipa::path(
    post,
    path = "/api/auth",
    tag = "Identity",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Invalid request", body = crate::error::ErrorResponse),
        (status = 401, description = "Incorrect username or password", body = crate::error::ErrorResponse)
    )
)]
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    request.validate()?;

    let user = state
        .users
        .find_by_username(&request.user_name)
        .await
        .map_err(store_failure)?;

    let Some(user) = user else {
        tracing::debug!("login rejected, unknown username");
        return Err(ApiError::InvalidCredentials);
    };

    let password_ok = state
        .credentials
        .verify(&user.id, &request.password)
        .await
        .map_err(|e| match e {
            // A user without a stored credential is a failed login,
            // not a server error
            StoreError::NotFound(_) => ApiError::InvalidCredentials,
            other => store_failure(other),
        })?;

    if !password_ok {
        tracing::debug!(user = %user.id, "login rejected, wrong password");
        return Err(ApiError::InvalidCredentials);
    }

    let token = state.tokens.issue(&user.username)?;

    tracing::info!(user = %user.id, "login succeeded");

    Ok(Json(LoginResponse { token }))
}

/// Get the authenticated user's own profile
#[utoipa::path(
    get,
    path = "/api/info",
    tag = "Identity",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Authenticated user's profile", body = UserResponse),
        (status = 401, description = "Invalid token", body = crate::error::ErrorResponse)
    )
)]
pub async fn info(
    State(state): State<Arc<AppState>>,
    CurrentSubject(subject): CurrentSubject,
) -> ApiResult<Json<UserResponse>> {
    let user = state.current_user(subject.as_str()).await?;
    Ok(Json(UserResponse::from(user)))
}

fn store_failure(err: StoreError) -> ApiError {
    tracing::error!(error = %err, "store failure during login");
    ApiError::Unavailable
}
