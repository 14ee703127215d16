//! Auth (Authentication Gate) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Identity claim and token claims
//! - `application/` - Token verification and issuance
//! - `presentation/` - The request-level gate (axum middleware)
//!
//! ## Security Model
//! - Stateless bearer credentials: HS256-signed JWTs carried in a fixed header
//! - Verification is a pure signature + expiry check; no I/O, no caching
//! - The verified identity lives only in the request's extensions

pub mod application;
pub mod domain;
pub mod error;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::issue_token::{IssuedToken, TokenIssuer};
pub use application::verify_token::TokenVerifier;
pub use domain::identity::Identity;
pub use error::{AuthError, AuthResult, TokenError};
pub use presentation::middleware::{AuthGate, require_auth};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
