//! Application Layer
//!
//! Use cases over the profile aggregate. Together they make up the
//! profile service: every operation that acts for a caller takes the
//! [`auth::Identity`] the gate produced.

pub mod config;
pub mod delete_account;
pub mod education;
pub mod experience;
pub mod get_own_profile;
pub mod get_profile_by_user;
pub mod github_repos;
pub mod list_profiles;
pub mod upsert_profile;
mod validation;
