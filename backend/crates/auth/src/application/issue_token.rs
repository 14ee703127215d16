//! Issue Token
//!
//! Mints HS256 tokens that [`crate::TokenVerifier`] accepts.
//! Account registration lives elsewhere; it calls this once credentials
//! have been checked.

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use kernel::id::UserId;
use platform::crypto::{hmac_sha256, to_base64_url};

use crate::application::config::AuthConfig;
use crate::domain::claims::{Claims, TokenHeader};

/// Output of token issuance
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Signs identity claims into bearer tokens
#[derive(Debug, Clone)]
pub struct TokenIssuer {
    config: Arc<AuthConfig>,
}

impl TokenIssuer {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }

    /// Issue a token for `user_id` valid from now
    pub fn issue(&self, user_id: &UserId) -> IssuedToken {
        let now = Utc::now().timestamp();
        let expires_at = now + self.config.token_ttl_secs();
        let token = self.issue_at(user_id, now);

        tracing::info!(user_id = %user_id, "Issued token");

        IssuedToken {
            token,
            expires_at: Utc
                .timestamp_opt(expires_at, 0)
                .single()
                .unwrap_or_else(Utc::now),
        }
    }

    /// Issue a token as of `now` (unix seconds)
    pub fn issue_at(&self, user_id: &UserId, now: i64) -> String {
        let claims = Claims::new(*user_id, now, now + self.config.token_ttl_secs());
        self.sign(&TokenHeader::hs256(), &claims)
    }

    fn sign(&self, header: &TokenHeader, claims: &Claims) -> String {
        // Both types serialize infallibly (strings and integers only)
        let header_json = serde_json::to_vec(header).unwrap_or_default();
        let claims_json = serde_json::to_vec(claims).unwrap_or_default();

        let signing_input = format!(
            "{}.{}",
            to_base64_url(&header_json),
            to_base64_url(&claims_json)
        );
        let signature = hmac_sha256(&self.config.jwt_secret, signing_input.as_bytes());

        format!("{}.{}", signing_input, to_base64_url(&signature))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform::crypto::from_base64_url;

    #[test]
    fn test_token_shape() {
        let issuer = TokenIssuer::new(Arc::new(AuthConfig::with_secret("s3cret")));
        let user_id = UserId::new();
        let token = issuer.issue_at(&user_id, 1_000);

        let parts: Vec<&str> = token.split('.').collect();
        assert_eq!(parts.len(), 3);

        let header: serde_json::Value =
            serde_json::from_slice(&from_base64_url(parts[0]).unwrap()).unwrap();
        assert_eq!(header["alg"], "HS256");

        let payload: serde_json::Value =
            serde_json::from_slice(&from_base64_url(parts[1]).unwrap()).unwrap();
        assert_eq!(payload["user"]["id"], user_id.to_string());
        assert_eq!(payload["iat"], 1_000);
        assert_eq!(payload["exp"], 1_000 + 360_000);
    }

    #[test]
    fn test_issue_sets_future_expiry() {
        let issuer = TokenIssuer::new(Arc::new(AuthConfig::with_secret("s3cret")));
        let issued = issuer.issue(&UserId::new());
        assert!(issued.expires_at > Utc::now());
    }
}
