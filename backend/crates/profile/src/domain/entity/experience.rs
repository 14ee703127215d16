//! Experience Entity
//!
//! One job in a profile's work history.

use chrono::NaiveDate;
use kernel::id::ExperienceId;
use serde::{Deserialize, Serialize};

use crate::domain::value_object::history::HistoryEntry;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub id: ExperienceId,
    pub title: String,
    pub company: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub from: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<NaiveDate>,
    #[serde(default)]
    pub current: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Validated fields for a new experience entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExperience {
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
    pub current: bool,
    pub description: Option<String>,
}

impl Experience {
    /// Create an entry with a freshly generated id
    pub fn new(fields: NewExperience) -> Self {
        Self {
            id: ExperienceId::new(),
            title: fields.title,
            company: fields.company,
            location: fields.location,
            from: fields.from,
            to: fields.to,
            current: fields.current,
            description: fields.description,
        }
    }
}

impl HistoryEntry for Experience {
    type Id = ExperienceId;

    fn entry_id(&self) -> ExperienceId {
        self.id
    }
}
