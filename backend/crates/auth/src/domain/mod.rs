//! Domain Layer
//!
//! - `identity` - The authenticated caller, scoped to one request
//! - `claims` - The JWT payload carrying the identity at issuance

pub mod claims;
pub mod identity;
