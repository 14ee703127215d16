//! Profile Aggregate
//!
//! One profile per user. The profile owns its experience and education
//! history outright; the user is referenced by id only.
//!
//! Updates arrive as a [`ProfilePatch`]: every optional attribute carries
//! an explicit [`FieldUpdate`], so "not supplied" and "cleared" are never
//! confused. `status` and `skills` are required and can be replaced but
//! never cleared.

use chrono::{DateTime, Utc};
use kernel::error::app_error::FieldError;
use kernel::id::{EducationId, ExperienceId, ProfileId, UserId};
use serde::Serialize;

use super::education::{Education, NewEducation};
use super::experience::{Experience, NewExperience};
use crate::domain::value_object::{
    field_update::FieldUpdate,
    history::History,
    skills::Skills,
    social::{SocialLinks, SocialPatch},
};

pub const STATUS_REQUIRED: &str = "Status is required";
pub const SKILLS_REQUIRED: &str = "Skills is required";

/// Profile aggregate
///
/// Serializes without the owner id; the presentation layer adds the
/// `user` field in whichever form the endpoint calls for.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Profile {
    pub id: ProfileId,
    #[serde(skip_serializing)]
    pub user_id: UserId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub githubusername: Option<String>,
    pub skills: Skills,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    pub social: SocialLinks,
    pub experience: History<Experience>,
    pub education: History<Education>,
    #[serde(rename = "date")]
    pub created_at: DateTime<Utc>,
}

/// Sparse update of a profile's scalar attributes and social links
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfilePatch {
    pub company: FieldUpdate<String>,
    pub website: FieldUpdate<String>,
    pub location: FieldUpdate<String>,
    pub bio: FieldUpdate<String>,
    pub githubusername: FieldUpdate<String>,
    /// Replacement status; `None` keeps the stored one
    pub status: Option<String>,
    /// Replacement skills; `None` keeps the stored ones
    pub skills: Option<Skills>,
    pub social: SocialPatch,
}

impl Profile {
    /// Create a profile holding exactly the supplied fields
    ///
    /// Fails when `status` or `skills` is missing.
    pub fn create(user_id: UserId, patch: ProfilePatch) -> Result<Self, Vec<FieldError>> {
        let mut errors = Vec::new();
        if patch.status.is_none() {
            errors.push(FieldError::new("status", STATUS_REQUIRED));
        }
        if patch.skills.as_ref().is_none_or(Skills::is_empty) {
            errors.push(FieldError::new("skills", SKILLS_REQUIRED));
        }
        let (Some(status), Some(skills)) = (patch.status, patch.skills) else {
            return Err(errors);
        };
        if !errors.is_empty() {
            return Err(errors);
        }

        let mut social = SocialLinks::default();
        social.apply(patch.social);

        Ok(Self {
            id: ProfileId::new(),
            user_id,
            company: patch.company.into_initial(),
            website: patch.website.into_initial(),
            location: patch.location.into_initial(),
            status,
            githubusername: patch.githubusername.into_initial(),
            skills,
            bio: patch.bio.into_initial(),
            social,
            experience: History::default(),
            education: History::default(),
            created_at: Utc::now(),
        })
    }

    /// Merge a patch; attributes the patch does not mention are untouched
    pub fn apply(&mut self, patch: ProfilePatch) {
        patch.company.apply_to(&mut self.company);
        patch.website.apply_to(&mut self.website);
        patch.location.apply_to(&mut self.location);
        patch.bio.apply_to(&mut self.bio);
        patch.githubusername.apply_to(&mut self.githubusername);
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(skills) = patch.skills {
            self.skills = skills;
        }
        self.social.apply(patch.social);
    }

    /// Add an experience entry as the most recent one
    pub fn add_experience(&mut self, fields: NewExperience) -> ExperienceId {
        let entry = Experience::new(fields);
        let id = entry.id;
        self.experience.push_latest(entry);
        id
    }

    pub fn remove_experience(&mut self, id: ExperienceId) -> Option<Experience> {
        self.experience.remove(id)
    }

    /// Add an education entry as the most recent one
    pub fn add_education(&mut self, fields: NewEducation) -> EducationId {
        let entry = Education::new(fields);
        let id = entry.id;
        self.education.push_latest(entry);
        id
    }

    pub fn remove_education(&mut self, id: EducationId) -> Option<Education> {
        self.education.remove(id)
    }
}
