use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::profile::{Education, Profile, Sector};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProfileError {
    #[error("Profile is incomplete; missing: {}", .missing.join(", "))]
    Incomplete { missing: Vec<&'static str> },
}

/// One field edit from the form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum ProfileEdit {
    Education(Education),
    /// Adds the skill if absent, removes it if present.
    ToggleSkill(String),
    Sector(Sector),
    Location(String),
    RemoteOk(bool),
}

/// Mutable form state. Becomes a `Profile` only through `submit`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDraft {
    pub education: Option<Education>,
    pub skills: Vec<String>,
    pub sector: Option<Sector>,
    pub location: String,
    pub remote_ok: bool,
}

impl ProfileDraft {
    pub fn apply(&mut self, edit: ProfileEdit) {
        match edit {
            ProfileEdit::Education(education) => self.education = Some(education),
            ProfileEdit::ToggleSkill(skill) => self.toggle_skill(skill),
            ProfileEdit::Sector(sector) => self.sector = Some(sector),
            ProfileEdit::Location(location) => self.location = location,
            ProfileEdit::RemoteOk(remote_ok) => self.remote_ok = remote_ok,
        }
    }

    fn toggle_skill(&mut self, skill: String) {
        if let Some(pos) = self.skills.iter().position(|s| *s == skill) {
            self.skills.remove(pos);
        } else {
            self.skills.push(skill);
        }
    }

    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.education.is_none() {
            missing.push("education");
        }
        if self.skills.is_empty() {
            missing.push("skills");
        }
        if self.sector.is_none() {
            missing.push("sector");
        }
        if self.location.is_empty() && !self.remote_ok {
            missing.push("location");
        }
        missing
    }

    pub fn is_valid(&self) -> bool {
        self.missing_fields().is_empty()
    }

    pub fn submit(&self) -> Result<Profile, ProfileError> {
        match (self.education, self.sector) {
            (Some(education), Some(sector)) if self.is_valid() => Ok(Profile {
                education,
                skills: self.skills.clone(),
                sector,
                location: self.location.clone(),
                remote_ok: self.remote_ok,
            }),
            _ => Err(ProfileError::Incomplete {
                missing: self.missing_fields(),
            }),
        }
    }
}
