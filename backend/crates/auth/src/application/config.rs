//! Application Configuration
//!
//! Configuration for the authentication gate.

use std::fmt;
use std::time::Duration;

/// Header carrying the bearer credential
pub const DEFAULT_TOKEN_HEADER: &str = "x-auth-token";

/// Auth application configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// Request header the gate reads the token from
    pub token_header: String,
    /// HS256 signing secret
    pub jwt_secret: Vec<u8>,
    /// Lifetime of tokens minted by [`crate::TokenIssuer`]
    pub token_ttl: Duration,
    /// Clock skew tolerated when checking `exp` / `nbf`
    pub leeway: Duration,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_header: DEFAULT_TOKEN_HEADER.to_string(),
            jwt_secret: Vec::new(),
            token_ttl: Duration::from_secs(360_000),
            leeway: Duration::ZERO,
        }
    }
}

impl AuthConfig {
    /// Create config with the given signing secret
    pub fn with_secret(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            jwt_secret: secret.into(),
            ..Default::default()
        }
    }

    /// Create config with a random signing secret (for development)
    pub fn with_random_secret() -> Self {
        Self::with_secret(platform::crypto::random_bytes(32))
    }

    /// Create config for development
    ///
    /// Tokens from a previous run are rejected since the secret changes.
    pub fn development() -> Self {
        Self::with_random_secret()
    }

    pub fn leeway_secs(&self) -> i64 {
        self.leeway.as_secs() as i64
    }

    pub fn token_ttl_secs(&self) -> i64 {
        self.token_ttl.as_secs() as i64
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("token_header", &self.token_header)
            .field("jwt_secret", &"[REDACTED]")
            .field("token_ttl", &self.token_ttl)
            .field("leeway", &self.leeway)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AuthConfig::default();
        assert_eq!(config.token_header, "x-auth-token");
        assert_eq!(config.leeway_secs(), 0);
        assert_eq!(config.token_ttl_secs(), 360_000);
    }

    #[test]
    fn test_random_secrets_differ() {
        let a = AuthConfig::with_random_secret();
        let b = AuthConfig::with_random_secret();
        assert_eq!(a.jwt_secret.len(), 32);
        assert_ne!(a.jwt_secret, b.jwt_secret);
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = AuthConfig::with_secret("hunter2");
        let debug = format!("{:?}", config);
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("hunter2"));
    }
}
