//! Verify Token
//!
//! Pure HS256 verification: segment decoding, constant-time signature
//! check, then `exp`/`nbf` against the clock. No I/O.

use std::sync::Arc;

use chrono::Utc;
use platform::crypto::{from_base64_url, verify_hmac_sha256};
use serde::de::DeserializeOwned;

use crate::application::config::AuthConfig;
use crate::domain::claims::{ALGORITHM_HS256, Claims, TokenHeader};
use crate::domain::identity::Identity;
use crate::error::TokenError;

/// Validates bearer credentials and extracts the identity claim
#[derive(Debug, Clone)]
pub struct TokenVerifier {
    config: Arc<AuthConfig>,
}

impl TokenVerifier {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }

    /// Verify a token against the current time
    pub fn verify(&self, token: &str) -> Result<Identity, TokenError> {
        self.verify_at(token, Utc::now().timestamp())
    }

    /// Verify a token as of `now` (unix seconds)
    pub fn verify_at(&self, token: &str, now: i64) -> Result<Identity, TokenError> {
        let mut segments = token.split('.');
        let (Some(header_b64), Some(payload_b64), Some(signature_b64), None) = (
            segments.next(),
            segments.next(),
            segments.next(),
            segments.next(),
        ) else {
            return Err(TokenError::Malformed);
        };

        let header: TokenHeader = decode_segment(header_b64)?;
        if header.alg != ALGORITHM_HS256 {
            return Err(TokenError::UnsupportedAlgorithm(header.alg));
        }

        let signature = from_base64_url(signature_b64).map_err(|_| TokenError::Malformed)?;
        // An empty key would let anyone mint valid signatures
        if signature.is_empty() || self.config.jwt_secret.is_empty() {
            return Err(TokenError::BadSignature);
        }

        // The signing input is the two encoded segments exactly as received
        let signing_input_len = header_b64.len() + 1 + payload_b64.len();
        let signing_input = &token.as_bytes()[..signing_input_len];
        if !verify_hmac_sha256(&self.config.jwt_secret, signing_input, &signature) {
            return Err(TokenError::BadSignature);
        }

        let payload = from_base64_url(payload_b64).map_err(|_| TokenError::Malformed)?;
        let claims: Claims = serde_json::from_slice(&payload)
            .map_err(|e| TokenError::InvalidClaims(e.to_string()))?;

        let leeway = self.config.leeway_secs();
        if now >= claims.exp.saturating_add(leeway) {
            return Err(TokenError::Expired);
        }
        if let Some(nbf) = claims.nbf {
            if now.saturating_add(leeway) < nbf {
                return Err(TokenError::NotYetValid);
            }
        }

        Ok(claims.identity())
    }
}

fn decode_segment<T: DeserializeOwned>(segment: &str) -> Result<T, TokenError> {
    let bytes = from_base64_url(segment).map_err(|_| TokenError::Malformed)?;
    serde_json::from_slice(&bytes).map_err(|_| TokenError::Malformed)
}
