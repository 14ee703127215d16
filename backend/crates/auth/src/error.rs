//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Reasons a presented token was rejected
///
/// Only logged; every variant is reported to the client as the same
/// "token is invalid" response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Not three base64url segments, or a segment is not valid JSON
    #[error("malformed token")]
    Malformed,

    /// Header declares an algorithm other than HS256 (including `none`)
    #[error("unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Signature missing or does not match the configured secret
    #[error("signature mismatch")]
    BadSignature,

    /// Payload is well-formed JSON but lacks the identity claim or `exp`
    #[error("invalid claims: {0}")]
    InvalidClaims(String),

    /// `exp` is in the past
    #[error("token expired")]
    Expired,

    /// `nbf` is in the future
    #[error("token not yet valid")]
    NotYetValid,
}

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// No credential header on the request
    #[error("no token, authorization denied")]
    MissingCredential,

    /// Credential present but failed verification
    #[error("token is invalid")]
    InvalidCredential(#[from] TokenError),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Unauthorized
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::InvalidCredential(reason) => {
                tracing::warn!(reason = %reason, "Rejected invalid credential");
            }
            AuthError::MissingCredential => {
                tracing::debug!("Request without credential");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
