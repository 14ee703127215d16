//! Token claims
//!
//! Wire shape of the JWT header and payload. The payload nests the caller
//! under `user` so tokens minted by the account service stay compatible:
//! `{"user":{"id":"<uuid>"},"iat":..,"exp":..}`.

use kernel::id::UserId;
use serde::{Deserialize, Serialize};

use super::identity::Identity;

/// The only signing algorithm accepted
pub const ALGORITHM_HS256: &str = "HS256";

/// JOSE header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenHeader {
    pub alg: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typ: Option<String>,
}

impl TokenHeader {
    pub fn hs256() -> Self {
        Self {
            alg: ALGORITHM_HS256.to_string(),
            typ: Some("JWT".to_string()),
        }
    }
}

/// Identity claim as embedded in the payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserClaim {
    pub id: UserId,
}

/// JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub user: UserClaim,
    /// Issued at (unix seconds)
    pub iat: i64,
    /// Expiry (unix seconds)
    pub exp: i64,
    /// Not before (unix seconds)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nbf: Option<i64>,
}

impl Claims {
    pub fn new(user_id: UserId, issued_at: i64, expires_at: i64) -> Self {
        Self {
            user: UserClaim { id: user_id },
            iat: issued_at,
            exp: expires_at,
            nbf: None,
        }
    }

    pub fn identity(&self) -> Identity {
        Identity::new(self.user.id)
    }
}
