//! Profile Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Profile aggregate, sparse patches, repository traits
//! - `application/` - Use cases (the profile service)
//! - `infra/` - PostgreSQL and in-memory storage, GitHub fetcher
//! - `presentation/` - HTTP handlers and router
//!
//! ## Invariants
//! - At most one profile per user; upsert creates or merges
//! - Absent fields never overwrite stored ones; a blank one clears it
//! - Experience and education are newest-first and removed by entry id
//! - Upstream repository lookups are bounded by the client timeout and
//!   every failure answers as one 404

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::ProfileConfig;
pub use error::{ProfileError, ProfileResult, UpstreamFailure};
pub use infra::cascade::NoOwnedResources;
pub use infra::github::GitHubRepoFetcher;
pub use infra::memory::InMemoryProfileRepository;
pub use infra::postgres::PgProfileRepository;
pub use presentation::router::{profile_router, profile_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
