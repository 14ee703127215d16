//! Profile Owner
//!
//! The slice of the user record joined into profile reads.

use kernel::id::UserId;
use serde::Serialize;

use super::profile::Profile;

/// Public summary of the user who owns a profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserSummary {
    pub id: UserId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// A profile together with its owner's summary
///
/// `owner` is `None` when the user record is gone but the profile is not
/// (a partially completed account deletion).
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileWithOwner {
    pub profile: Profile,
    pub owner: Option<UserSummary>,
}
