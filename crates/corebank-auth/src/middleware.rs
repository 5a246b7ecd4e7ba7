//! Authentication middleware for axum
//!
//! Validates the bearer credential on inbound requests and hands the
//! recovered [`Subject`] to handlers through request extensions. The layer
//! itself never rejects: a request with no credential, or with a stale or
//! forged one, passes through without a subject, so public routes (login,
//! health) keep working whatever the client left in its default headers.
//! Handlers that need a caller use [`CurrentSubject`], which rejects
//! subject-less requests with one generic 401.

use axum::{
    async_trait,
    body::Body,
    extract::{FromRequestParts, Request},
    http::{request::Parts, HeaderMap, StatusCode},
    response::Response,
};
use std::sync::Arc;
use std::task::{Context, Poll};
use tower::{Layer, Service};

use crate::claims::Subject;
use crate::error::{AuthError, ErrorMessage};
use crate::jwt::TokenService;

/// Authentication middleware layer
#[derive(Clone)]
pub struct AuthLayer {
    tokens: Arc<TokenService>,
}

impl AuthLayer {
    /// Create a new authentication layer around a token service
    pub fn new(tokens: Arc<TokenService>) -> Self {
        Self { tokens }
    }
}

impl<S> Layer<S> for AuthLayer {
    type Service = AuthMiddleware<S>;

    fn layer(&self, inner: S) -> Self::Service {
        AuthMiddleware {
            inner,
            tokens: self.tokens.clone(),
        }
    }
}

/// Authentication middleware service
#[derive(Clone)]
pub struct AuthMiddleware<S> {
    inner: S,
    tokens: Arc<TokenService>,
}

impl<S> Service<Request> for AuthMiddleware<S>
where
    S: Service<Request, Response = Response> + Send + Clone + 'static,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request) -> Self::Future {
        let tokens = self.tokens.clone();
        let mut inner = self.inner.clone();

        Box::pin(async move {
            let (mut parts, body) = req.into_parts();
            match authenticate_request(&parts.headers, &tokens) {
                Ok(subject) => {
                    parts.extensions.insert(subject);
                }
                Err(AuthError::Unauthenticated) => {
                    // No credential presented. Extraction decides per route.
                }
                Err(e) => {
                    // A stale or forged credential is dropped, not fatal:
                    // public routes must keep working, and protected routes
                    // reject through the extractor anyway.
                    tracing::debug!(error = %e, "ignoring invalid bearer credential");
                }
            }
            inner.call(Request::from_parts(parts, body)).await
        })
    }
}

/// Pull the bearer token off the Authorization header and validate it
fn authenticate_request(headers: &HeaderMap, tokens: &TokenService) -> Result<Subject, AuthError> {
    let Some(auth_header) = headers.get("Authorization") else {
        return Err(AuthError::Unauthenticated);
    };

    let auth_str = auth_header.to_str().map_err(|_| AuthError::InvalidToken)?;
    let token = auth_str
        .strip_prefix("Bearer ")
        .ok_or(AuthError::InvalidToken)?;

    tokens.validate(token)
}

/// Build the canonical error response for an authentication failure
pub fn auth_error_response(error: AuthError) -> Response {
    let status =
        StatusCode::from_u16(error.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let body = ErrorMessage::from(&error);

    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap_or_default()))
        .unwrap_or_else(|_| Response::new(Body::empty()))
}

/// Extractor for the authenticated subject.
///
/// Rejects with the same `401 {"message": "Invalid token"}` whether the
/// request carried no credential or an invalid one.
pub struct CurrentSubject(pub Subject);

#[async_trait]
impl<S> FromRequestParts<S> for CurrentSubject
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Subject>()
            .cloned()
            .map(CurrentSubject)
            .ok_or_else(|| auth_error_response(AuthError::Unauthenticated))
    }
}
