//! Auth Middleware
//!
//! Middleware for requiring a verified credential on protected routes.

use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderMap, Request};
use axum::middleware::Next;
use axum::response::Response;

use crate::application::config::AuthConfig;
use crate::application::verify_token::TokenVerifier;
use crate::domain::identity::Identity;
use crate::error::{AuthError, AuthResult};

/// Request-level gate: header extraction + token verification
#[derive(Debug, Clone)]
pub struct AuthGate {
    verifier: TokenVerifier,
    config: Arc<AuthConfig>,
}

impl AuthGate {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self {
            verifier: TokenVerifier::new(config.clone()),
            config,
        }
    }

    /// Resolve the caller identity from request headers
    pub fn authenticate(&self, headers: &HeaderMap) -> AuthResult<Identity> {
        let token = platform::header::extract_header(headers, &self.config.token_header)
            .ok_or(AuthError::MissingCredential)?;

        Ok(self.verifier.verify(&token)?)
    }
}

/// Middleware that requires a valid credential
///
/// On success the [`Identity`] is placed in request extensions and the
/// wrapped handler runs exactly once. On failure the handler never runs.
pub async fn require_auth(
    State(gate): State<AuthGate>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AuthError> {
    let identity = gate.authenticate(req.headers())?;

    tracing::debug!(user_id = %identity.user_id, "Authenticated request");

    req.extensions_mut().insert(identity);
    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::issue_token::TokenIssuer;
    use crate::error::TokenError;
    use axum::body::to_bytes;
    use axum::http::{HeaderValue, StatusCode};
    use axum::routing::get;
    use axum::{Extension, Router, middleware};
    use kernel::id::UserId;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tower::ServiceExt;

    fn config() -> Arc<AuthConfig> {
        Arc::new(AuthConfig::with_secret("gate-secret"))
    }

    fn app(gate: AuthGate, hits: Arc<AtomicUsize>) -> Router {
        Router::new()
            .route(
                "/me",
                get(move |Extension(identity): Extension<Identity>| {
                    let hits = hits.clone();
                    async move {
                        hits.fetch_add(1, Ordering::SeqCst);
                        identity.user_id.to_string()
                    }
                }),
            )
            .route_layer(middleware::from_fn_with_state(gate, require_auth))
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_authenticate_missing_header() {
        let gate = AuthGate::new(config());
        let result = gate.authenticate(&HeaderMap::new());
        assert!(matches!(result, Err(AuthError::MissingCredential)));
    }

    #[test]
    fn test_authenticate_invalid_token() {
        let gate = AuthGate::new(config());
        let mut headers = HeaderMap::new();
        headers.insert("x-auth-token", HeaderValue::from_static("not-a-token"));

        let result = gate.authenticate(&headers);
        assert!(matches!(
            result,
            Err(AuthError::InvalidCredential(TokenError::Malformed))
        ));
    }

    #[tokio::test]
    async fn test_missing_token_never_reaches_handler() {
        let hits = Arc::new(AtomicUsize::new(0));
        let response = app(AuthGate::new(config()), hits.clone())
            .oneshot(Request::get("/me").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"errors": [{"msg": "no token, authorization denied"}]})
        );
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_invalid_token_never_reaches_handler() {
        let hits = Arc::new(AtomicUsize::new(0));
        let foreign = TokenIssuer::new(Arc::new(AuthConfig::with_secret("someone-else")))
            .issue(&UserId::new());

        let response = app(AuthGate::new(config()), hits.clone())
            .oneshot(
                Request::get("/me")
                    .header("x-auth-token", foreign.token)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"errors": [{"msg": "token is invalid"}]})
        );
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_valid_token_runs_handler_once_with_identity() {
        let config = config();
        let hits = Arc::new(AtomicUsize::new(0));
        let user_id = UserId::new();
        let issued = TokenIssuer::new(config.clone()).issue(&user_id);

        let response = app(AuthGate::new(config), hits.clone())
            .oneshot(
                Request::get("/me")
                    .header("x-auth-token", issued.token)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], user_id.to_string().as_bytes());
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }
}
