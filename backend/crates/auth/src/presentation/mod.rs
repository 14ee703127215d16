//! Presentation Layer
//!
//! The authentication gate wrapping protected routes.

pub mod middleware;
