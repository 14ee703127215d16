//! Education Entity

use chrono::NaiveDate;
use kernel::id::EducationId;
use serde::{Deserialize, Serialize};

use crate::domain::value_object::history::HistoryEntry;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub id: EducationId,
    pub school: String,
    pub degree: String,
    pub fieldofstudy: String,
    pub from: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<NaiveDate>,
    #[serde(default)]
    pub current: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Validated fields for a new education entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEducation {
    pub school: String,
    pub degree: String,
    pub fieldofstudy: String,
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
    pub current: bool,
    pub description: Option<String>,
}

impl Education {
    pub fn new(fields: NewEducation) -> Self {
        Self {
            id: EducationId::new(),
            school: fields.school,
            degree: fields.degree,
            fieldofstudy: fields.fieldofstudy,
            from: fields.from,
            to: fields.to,
            current: fields.current,
            description: fields.description,
        }
    }
}

impl HistoryEntry for Education {
    type Id = EducationId;

    fn entry_id(&self) -> EducationId {
        self.id
    }
}
