//! Error conversions - transport mapping for [`AppError`]
//!
//! Client errors (4xx) are rendered as the error-list envelope,
//! server errors (5xx) as an unstructured generic body.

#[cfg(feature = "axum")]
use super::app_error::{AppError, FieldError, SERVER_ERROR_BODY};

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if self.is_server_error() {
            return (status, SERVER_ERROR_BODY).into_response();
        }

        (status, Json(self.envelope())).into_response()
    }
}

/// 不正な JSON ボディは 400 エンベロープとして返す
#[cfg(feature = "axum")]
impl From<axum::extract::rejection::JsonRejection> for AppError {
    fn from(rejection: axum::extract::rejection::JsonRejection) -> Self {
        AppError::validation(vec![FieldError::message(rejection.body_text())])
    }
}

#[cfg(all(test, feature = "axum"))]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[tokio::test]
    async fn test_client_error_renders_envelope() {
        let response = AppError::unauthorized("token is invalid").into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json, serde_json::json!({"errors": [{"msg": "token is invalid"}]}));
    }

    #[tokio::test]
    async fn test_server_error_is_generic() {
        let response = AppError::internal("connection reset by peer").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], SERVER_ERROR_BODY.as_bytes());
    }
}
