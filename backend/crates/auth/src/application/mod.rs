//! Application Layer
//!
//! Token verification (the gate's only dependency) and issuance.

pub mod config;
pub mod issue_token;
pub mod verify_token;
