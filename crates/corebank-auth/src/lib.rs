//! CoreBank Authentication Layer
//!
//! Token-based authentication for the CoreBank API:
//!
//! - **JWT Issuance**: HMAC-signed bearer tokens minted at login
//! - **JWT Validation**: Issuer and audience checks on every request,
//!   with token lifetime enforcement as an explicit opt-in
//! - **Claim Mapping**: Startup-fixed table naming which inbound claim
//!   carries the subject
//! - **Middleware**: Tower layer that authenticates requests and hands
//!   the subject to handlers through request extensions
//!
//! Every token failure surfaces to clients as the same generic
//! `Invalid token` message; the precise reason is only logged.

pub mod claims;
pub mod config;
pub mod error;
pub mod jwt;
pub mod middleware;

pub use claims::{ClaimMap, Claims, Subject};
pub use config::TokenConfig;
pub use error::{AuthError, AuthResult, ErrorMessage};
pub use jwt::TokenService;
pub use middleware::{auth_error_response, AuthLayer, AuthMiddleware, CurrentSubject};
