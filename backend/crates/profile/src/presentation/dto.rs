//! API DTOs (Data Transfer Objects)

use kernel::error::app_error::FieldError;
use kernel::id::UserId;
use serde::{Deserialize, Serialize};

use crate::application::education::AddEducationInput;
use crate::application::experience::AddExperienceInput;
use crate::application::upsert_profile::UpsertProfileInput;
use crate::domain::entity::{
    owner::{ProfileWithOwner, UserSummary},
    profile::{Profile, SKILLS_REQUIRED, STATUS_REQUIRED},
};

/// Skills as sent by clients: one comma-separated string, or a list
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SkillsField {
    Text(String),
    List(Vec<String>),
}

impl SkillsField {
    fn into_raw(self) -> String {
        match self {
            SkillsField::Text(text) => text,
            SkillsField::List(list) => list.join(","),
        }
    }
}

/// Request for POST /api/profile
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpsertProfileRequest {
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub githubusername: Option<String>,
    #[serde(default)]
    pub skills: Option<SkillsField>,
    #[serde(default)]
    pub youtube: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
    #[serde(default)]
    pub facebook: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub instagram: Option<String>,
}

impl UpsertProfileRequest {
    /// The endpoint always requires `status` and `skills`, update or not
    pub fn check_required(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        if self.status.as_deref().is_none_or(|s| s.trim().is_empty()) {
            errors.push(FieldError::new("status", STATUS_REQUIRED));
        }
        let skills_blank = match &self.skills {
            None => true,
            Some(SkillsField::Text(text)) => text.trim().is_empty(),
            Some(SkillsField::List(list)) => list.iter().all(|s| s.trim().is_empty()),
        };
        if skills_blank {
            errors.push(FieldError::new("skills", SKILLS_REQUIRED));
        }
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    pub fn into_input(self) -> UpsertProfileInput {
        UpsertProfileInput {
            company: self.company,
            website: self.website,
            location: self.location,
            bio: self.bio,
            status: self.status,
            githubusername: self.githubusername,
            skills: self.skills.map(SkillsField::into_raw),
            youtube: self.youtube,
            twitter: self.twitter,
            facebook: self.facebook,
            linkedin: self.linkedin,
            instagram: self.instagram,
        }
    }
}

/// Request for PUT /api/profile/experience
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddExperienceRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub current: Option<bool>,
    #[serde(default)]
    pub description: Option<String>,
}

impl From<AddExperienceRequest> for AddExperienceInput {
    fn from(req: AddExperienceRequest) -> Self {
        Self {
            title: req.title,
            company: req.company,
            location: req.location,
            from: req.from,
            to: req.to,
            current: req.current,
            description: req.description,
        }
    }
}

/// Request for PUT /api/profile/education
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddEducationRequest {
    #[serde(default)]
    pub school: Option<String>,
    #[serde(default)]
    pub degree: Option<String>,
    #[serde(default)]
    pub fieldofstudy: Option<String>,
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub current: Option<bool>,
    #[serde(default)]
    pub description: Option<String>,
}

impl From<AddEducationRequest> for AddEducationInput {
    fn from(req: AddEducationRequest) -> Self {
        Self {
            school: req.school,
            degree: req.degree,
            fieldofstudy: req.fieldofstudy,
            from: req.from,
            to: req.to,
            current: req.current,
            description: req.description,
        }
    }
}

/// The `user` field of a profile response
///
/// Reads that join the owner return `{id, name, avatar}`; writes return the
/// bare id.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum OwnerRef {
    Summary(UserSummary),
    Id(UserId),
}

/// Profile as returned by every profile endpoint
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    #[serde(flatten)]
    pub profile: Profile,
    pub user: OwnerRef,
}

impl ProfileResponse {
    pub fn with_owner_id(profile: Profile) -> Self {
        let user = OwnerRef::Id(profile.user_id);
        Self { profile, user }
    }
}

impl From<ProfileWithOwner> for ProfileResponse {
    fn from(found: ProfileWithOwner) -> Self {
        let user = match found.owner {
            Some(owner) => OwnerRef::Summary(owner),
            None => OwnerRef::Id(found.profile.user_id),
        };
        Self {
            profile: found.profile,
            user,
        }
    }
}
