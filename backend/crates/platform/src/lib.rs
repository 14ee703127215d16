//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (HMAC-SHA256, Base64url)
//! - Request header extraction
//! - Outbound HTTP client construction

pub mod crypto;
pub mod header;
pub mod http_client;
