//! Owner-scoped account handlers
//!
//! Each handler resolves the bearer subject to a user first, then hands
//! that user's id to the domain services; no handler touches an account
//! without the ownership gate seeing who is asking.

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use validator::Validate;

use corebank_auth::CurrentSubject;
use corebank_core::CoreError;
use corebank_types::{AccountId, CardId};

use crate::dto::{
    BankAccountResponse, TransactionCodeResponse, TransferModel, TransferResponse, UserResponse,
};
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Get an account the caller owns.
///
/// A foreign account id gets the same 404 as a non-existent one.
#[utoipa::path(
    get,
    path = "/api/account/{accountId}",
    tag = "Accounts",
    security(("bearer" = [])),
    params(
        ("accountId" = String, Path, description = "Opaque account identifier")
    ),
    responses(
        (status = 200, description = "The caller's account", body = BankAccountResponse),
        (status = 401, description = "Invalid token", body = crate::error::ErrorResponse),
        (status = 404, description = "Account not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_account(
    State(state): State<Arc<AppState>>,
    CurrentSubject(subject): CurrentSubject,
    Path(account_id): Path<String>,
) -> ApiResult<Json<BankAccountResponse>> {
    let user = state.current_user(subject.as_str()).await?;

    let account = state
        .access
        .account_owned_by(&user.id, &AccountId::new(account_id))
        .await?;

    Ok(Json(BankAccountResponse::from(account)))
}

/// Get the holder profile behind an account the caller owns
#[utoipa::path(
    get,
    path = "/api/account-user/{accountId}",
    tag = "Accounts",
    security(("bearer" = [])),
    params(
        ("accountId" = String, Path, description = "Opaque account identifier")
    ),
    responses(
        (status = 200, description = "The account holder's profile", body = UserResponse),
        (status = 401, description = "Invalid token", body = crate::error::ErrorResponse),
        (status = 404, description = "Account not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_account_holder(
    State(state): State<Arc<AppState>>,
    CurrentSubject(subject): CurrentSubject,
    Path(account_id): Path<String>,
) -> ApiResult<Json<UserResponse>> {
    let user = state.current_user(subject.as_str()).await?;

    let holder = state
        .access
        .holder_owned_by(&user.id, &AccountId::new(account_id))
        .await?;

    Ok(Json(UserResponse::from(holder)))
}

/// Transfer money from an account the caller owns.
///
/// Whatever fails (ownership, code, amount, funds, destination), the
/// response is the same 400.
#[utoipa::path(
    post,
    path = "/api/account-transfer",
    tag = "Accounts",
    security(("bearer" = [])),
    request_body = TransferModel,
    responses(
        (status = 200, description = "Transfer committed", body = TransferResponse),
        (status = 400, description = "Sorry, you cannot transfer money", body = crate::error::ErrorResponse),
        (status = 401, description = "Invalid token", body = crate::error::ErrorResponse)
    )
)]
pub async fn transfer(
    State(state): State<Arc<AppState>>,
    CurrentSubject(subject): CurrentSubject,
    Json(request): Json<TransferModel>,
) -> ApiResult<Json<TransferResponse>> {
    request.validate()?;

    let user = state.current_user(subject.as_str()).await?;

    let receipt = state
        .transfers
        .execute(&user.id, &request.into())
        .await
        .map_err(|e| match e {
            // Keep the rejection uniform even for errors the engine
            // classifies differently
            CoreError::NotFound => ApiError::TransferRejected,
            other => ApiError::from(other),
        })?;

    Ok(Json(TransferResponse::from(receipt)))
}

/// Generate a one-time transaction code for a card the caller owns
#[utoipa::path(
    get,
    path = "/api/account-code/{cardId}",
    tag = "Accounts",
    security(("bearer" = [])),
    params(
        ("cardId" = String, Path, description = "Card identifier")
    ),
    responses(
        (status = 200, description = "Fresh transaction code", body = TransactionCodeResponse),
        (status = 400, description = "Could not generate transaction code", body = crate::error::ErrorResponse),
        (status = 401, description = "Invalid token", body = crate::error::ErrorResponse)
    )
)]
pub async fn transaction_code(
    State(state): State<Arc<AppState>>,
    CurrentSubject(subject): CurrentSubject,
    Path(card_id): Path<String>,
) -> ApiResult<Json<TransactionCodeResponse>> {
    let user = state.current_user(subject.as_str()).await?;

    let code = state
        .codes
        .generate(&user.id, &CardId::new(card_id))
        .await
        .map_err(|e| match e {
            CoreError::NotFound => ApiError::CodeGenerationFailed,
            other => ApiError::from(other),
        })?;

    Ok(Json(TransactionCodeResponse::from(code)))
}
