//! Repository Traits
//!
//! Interfaces for data persistence and outbound lookups. Implementations
//! are in the infrastructure layer.

use kernel::id::UserId;

use crate::domain::entity::{
    owner::ProfileWithOwner,
    profile::Profile,
    repo_summary::RepoSummary,
};
use crate::error::{ProfileResult, UpstreamFailure};

/// Profile repository trait
#[trait_variant::make(ProfileRepository: Send)]
pub trait LocalProfileRepository {
    /// Find the profile owned by a user
    async fn find_profile(&self, user_id: &UserId) -> ProfileResult<Option<Profile>>;

    /// Find the profile owned by a user, joined with the owner's summary
    async fn find_profile_with_owner(
        &self,
        user_id: &UserId,
    ) -> ProfileResult<Option<ProfileWithOwner>>;

    /// All profiles joined with their owners, oldest first
    async fn list_profiles_with_owner(&self) -> ProfileResult<Vec<ProfileWithOwner>>;

    /// Insert, or replace the profile already owned by `profile.user_id`
    async fn save_profile(&self, profile: &Profile) -> ProfileResult<()>;

    /// Delete the profile owned by a user. Returns whether one existed
    async fn delete_profile(&self, user_id: &UserId) -> ProfileResult<bool>;
}

/// User repository trait
///
/// Only the operations profiles need; registration lives elsewhere.
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Delete a user record. Returns whether one existed
    async fn delete_user(&self, user_id: &UserId) -> ProfileResult<bool>;
}

/// Everything the profile use cases need from storage
pub trait ProfileStore: ProfileRepository + UserRepository + Send + Sync + 'static {}

impl<T> ProfileStore for T where T: ProfileRepository + UserRepository + Send + Sync + 'static {}

/// Deletion of other resources a user owns, run before the account goes
#[trait_variant::make(AccountCascade: Send)]
pub trait LocalAccountCascade {
    /// Delete everything owned by `user_id` outside profile and user.
    /// Returns the number of records removed
    async fn delete_owned_by(&self, user_id: &UserId) -> ProfileResult<u64>;
}

/// Lists a user's public repositories on the external code host
#[trait_variant::make(RepoFetcher: Send)]
pub trait LocalRepoFetcher {
    async fn fetch_repos(&self, username: &str) -> Result<Vec<RepoSummary>, UpstreamFailure>;
}
