use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Education {
    Undergraduate,
    Graduate,
    Diploma,
}

impl Education {
    pub const ALL: [Education; 3] = [
        Education::Undergraduate,
        Education::Graduate,
        Education::Diploma,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Education::Undergraduate => "undergraduate",
            Education::Graduate => "graduate",
            Education::Diploma => "diploma",
        }
    }
}

/// Sector of interest. Wire keys are camelCase (`dataScience`, `webDev`, ...).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Sector {
    DataScience,
    WebDev,
    Cloud,
    Cybersecurity,
    Content,
    Design,
}

impl Sector {
    pub const ALL: [Sector; 6] = [
        Sector::DataScience,
        Sector::WebDev,
        Sector::Cloud,
        Sector::Cybersecurity,
        Sector::Content,
        Sector::Design,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Sector::DataScience => "dataScience",
            Sector::WebDev => "webDev",
            Sector::Cloud => "cloud",
            Sector::Cybersecurity => "cybersecurity",
            Sector::Content => "content",
            Sector::Design => "design",
        }
    }
}

/// A submitted preference record. Built only through `ProfileDraft::submit`
/// inside a session, or deserialized whole by the stateless endpoint.
/// Wire fields are camelCase like the sector keys (`remoteOk`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub education: Education,
    pub skills: Vec<String>,
    pub sector: Sector,
    pub location: String,
    pub remote_ok: bool,
}

impl Profile {
    pub fn has_skill(&self, skill: &str) -> bool {
        self.skills.iter().any(|s| s == skill)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sector_wire_keys_are_camel_case() {
        for sector in Sector::ALL {
            let value = serde_json::to_value(sector).unwrap();
            assert_eq!(value, json!(sector.key()));
        }
    }

    #[test]
    fn test_profile_deserializes_from_wire_shape() {
        let profile: Profile = serde_json::from_value(json!({
            "education": "graduate",
            "skills": ["Python", "SQL"],
            "sector": "dataScience",
            "location": "Bengaluru",
            "remoteOk": false
        }))
        .unwrap();

        assert_eq!(profile.education, Education::Graduate);
        assert_eq!(profile.sector, Sector::DataScience);
        assert!(profile.has_skill("SQL"));
        assert!(!profile.has_skill("sql"));
        assert!(!profile.remote_ok);
    }

    #[test]
    fn test_profile_serializes_remote_ok_as_camel_case() {
        let profile = Profile {
            education: Education::Diploma,
            skills: vec![],
            sector: Sector::Cloud,
            location: String::new(),
            remote_ok: true,
        };
        let value = serde_json::to_value(&profile).unwrap();
        assert_eq!(value["remoteOk"], true);
        assert!(value.get("remote_ok").is_none());
    }

    #[test]
    fn test_profile_missing_field_is_rejected() {
        let result: Result<Profile, _> = serde_json::from_value(json!({
            "education": "graduate",
            "skills": ["Python"],
            "location": "Pune",
            "remoteOk": true
        }));
        assert!(result.is_err());
    }
}
