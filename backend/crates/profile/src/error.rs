//! Profile Error Types
//!
//! This module provides profile-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.
//!
//! Some variants are finer than what clients see: `MalformedUserId`
//! answers exactly like `ProfileNotFound`, and every [`UpstreamFailure`]
//! answers as one 404. The detail only reaches the logs.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{
    app_error::{AppError, FieldError},
    kind::ErrorKind,
};
use thiserror::Error;

/// Profile-specific result type alias
pub type ProfileResult<T> = Result<T, ProfileError>;

pub const NO_PROFILE_FOR_USER: &str = "There is no profile for this user";
pub const PROFILE_NOT_FOUND: &str = "Profile not found";
pub const NO_GITHUB_PROFILE: &str = "No github profile found";

/// Why the external repository lookup failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpstreamFailure {
    /// Username cannot name an account on the code host
    #[error("invalid username: {0}")]
    InvalidUsername(String),

    /// Upstream answered with a non-200 status
    #[error("upstream returned status {0}")]
    Status(u16),

    /// Request did not complete within the client timeout
    #[error("upstream timed out")]
    Timeout,

    /// Connection or protocol failure
    #[error("transport error: {0}")]
    Transport(String),

    /// Body was not a JSON array
    #[error("unexpected body: {0}")]
    InvalidBody(String),
}

/// Profile-specific error variants
#[derive(Debug, Error)]
pub enum ProfileError {
    /// Request fields failed validation
    #[error("Validation failed")]
    ValidationFailed(Vec<FieldError>),

    /// Caller has no profile
    #[error("There is no profile for this user")]
    NoProfileForUser,

    /// No profile for the requested user id
    #[error("Profile not found")]
    ProfileNotFound,

    /// Requested user id is not a valid id
    #[error("Profile not found")]
    MalformedUserId(String),

    /// External repository lookup failed
    #[error("No github profile found")]
    ExternalLookupFailed(#[from] UpstreamFailure),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ProfileError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ProfileError::ValidationFailed(_)
            | ProfileError::NoProfileForUser
            | ProfileError::ProfileNotFound
            | ProfileError::MalformedUserId(_) => ErrorKind::BadRequest,
            ProfileError::ExternalLookupFailed(_) => ErrorKind::NotFound,
            ProfileError::Database(_) | ProfileError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            ProfileError::ValidationFailed(details) => AppError::validation(details.clone()),
            ProfileError::Database(_) | ProfileError::Internal(_) => {
                AppError::internal(self.to_string())
            }
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            ProfileError::Database(e) => {
                tracing::error!(error = %e, "Profile database error");
            }
            ProfileError::Internal(msg) => {
                tracing::error!(message = %msg, "Profile internal error");
            }
            ProfileError::ExternalLookupFailed(reason) => {
                tracing::warn!(reason = %reason, "Repository lookup failed");
            }
            ProfileError::MalformedUserId(raw) => {
                tracing::debug!(user_id = %raw, "Malformed user id");
            }
            ProfileError::ValidationFailed(details) => {
                tracing::debug!(count = details.len(), "Validation failed");
            }
            _ => {
                tracing::debug!(error = %self, "Profile client error");
            }
        }
    }
}

impl From<Vec<FieldError>> for ProfileError {
    fn from(details: Vec<FieldError>) -> Self {
        ProfileError::ValidationFailed(details)
    }
}

impl IntoResponse for ProfileError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_id_answers_like_not_found() {
        let malformed = ProfileError::MalformedUserId("nope".into()).to_app_error();
        let missing = ProfileError::ProfileNotFound.to_app_error();

        assert_eq!(malformed.status_code(), missing.status_code());
        assert_eq!(malformed.envelope(), missing.envelope());
        assert_eq!(missing.message(), PROFILE_NOT_FOUND);
    }

    #[test]
    fn test_upstream_failures_collapse() {
        for reason in [
            UpstreamFailure::Status(404),
            UpstreamFailure::Timeout,
            UpstreamFailure::InvalidBody("object".into()),
        ] {
            let err = ProfileError::from(reason).to_app_error();
            assert_eq!(err.status_code(), 404);
            assert_eq!(err.message(), NO_GITHUB_PROFILE);
        }
    }

    #[test]
    fn test_validation_keeps_every_field() {
        let err = ProfileError::from(vec![
            FieldError::new("title", "Title is required"),
            FieldError::new("company", "Company is required"),
        ]);

        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_app_error().envelope().errors.len(), 2);
    }

    #[test]
    fn test_internal_is_server_error() {
        let err = ProfileError::Internal("store unavailable".into());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_app_error().is_server_error());
    }
}
