//! Infrastructure Layer
//!
//! - `postgres` - sqlx-backed profile and user storage
//! - `memory` - In-process storage for tests and local runs
//! - `github` - GitHub REST client behind [`crate::domain::repository::RepoFetcher`]
//! - `cascade` - Default account cascade

pub mod cascade;
pub mod github;
pub mod memory;
pub mod postgres;
