use serde::{Deserialize, Serialize};

/// A single skill entry in the profile draft.
///
/// Admission into the draft's skill list is gated by [`Skill::validate`]:
/// a name must be present and the years of experience must be positive.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Skill {
    /// The skill name, e.g. "React".
    pub name: String,

    /// Years of experience with the skill; must be greater than zero.
    pub years: f64,

    /// When the skill was last used, as a `YYYY-MM` month stamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_used: Option<String>,

    /// Self-assessed proficiency on a 1-10 scale.
    pub level: u8,
}

impl Default for Skill {
    fn default() -> Self {
        Self {
            name: String::new(),
            years: 0.0,
            last_used: None,
            level: 5,
        }
    }
}

impl Skill {
    /// Check whether this entry may be admitted into a profile draft.
    ///
    /// # Errors
    /// Returns a user-facing message when the name is empty or the years of
    /// experience are not positive.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("Please enter a skill name");
        }
        if self.years <= 0.0 {
            return Err("Please enter years of experience (greater than 0)");
        }
        Ok(())
    }
}

/// A project entry in the profile draft.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Project {
    /// Project title.
    pub title: String,

    /// Free-text description of the project.
    pub description: String,

    /// Technologies used, committed one at a time.
    pub stack: Vec<String>,
}

impl Project {
    /// Check whether this entry may be admitted into a profile draft.
    ///
    /// # Errors
    /// Returns a user-facing message when the title or description is empty.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.title.trim().is_empty() {
            return Err("Please enter a project title");
        }
        if self.description.trim().is_empty() {
            return Err("Please enter a project description");
        }
        Ok(())
    }
}

/// An education entry in the profile draft.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Education {
    /// Degree obtained, e.g. "B.S. Computer Science".
    pub degree: String,

    /// Awarding institution.
    pub institution: String,

    /// Graduation year, free text, optional.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
}

impl Education {
    /// Check whether this entry may be admitted into a profile draft.
    ///
    /// # Errors
    /// Returns a user-facing message when the degree or institution is empty.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.degree.trim().is_empty() {
            return Err("Please enter a degree");
        }
        if self.institution.trim().is_empty() {
            return Err("Please enter an institution");
        }
        Ok(())
    }
}

/// The in-progress profile built across the onboarding wizard steps.
///
/// Serialized as the `profile_data` field of the multipart submission; the
/// optional resume file travels as a separate binary part and is never part
/// of this struct.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProfileDraft {
    /// Full name.
    pub name: String,

    /// Roles the user is interested in.
    pub roles: Vec<String>,

    /// Domain interests, e.g. "Web Development".
    pub interests: Vec<String>,

    /// Validated skill entries; submission requires at least one.
    pub skills: Vec<Skill>,

    /// Total years of professional experience.
    pub experience_years: f64,

    /// Validated project entries.
    pub projects: Vec<Project>,

    /// Validated education entries.
    pub education: Vec<Education>,

    /// Free-text location, optional in practice.
    pub location: String,
}

impl ProfileDraft {
    /// Whether submission must be blocked client-side.
    ///
    /// The backend requires at least one skill; an empty skill list never
    /// produces a network call.
    #[must_use]
    pub fn submit_blocked(&self) -> bool {
        self.skills.is_empty()
    }
}

/// The stored profile as returned by `GET /profile`.
///
/// The endpoint returns `null` when onboarding has not completed, which the
/// client maps to `Option<Profile>`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    /// Full name.
    #[serde(default)]
    pub name: String,

    /// Roles the user is interested in; the first entry is the default role
    /// for analysis runs.
    #[serde(default)]
    pub roles: Vec<String>,

    /// Domain interests.
    #[serde(default)]
    pub interests: Vec<String>,

    /// Skill entries.
    #[serde(default)]
    pub skills: Vec<Skill>,

    /// Total years of professional experience.
    #[serde(default)]
    pub experience_years: f64,

    /// Project entries.
    #[serde(default)]
    pub projects: Vec<Project>,

    /// Education entries.
    #[serde(default)]
    pub education: Vec<Education>,

    /// Free-text location.
    #[serde(default)]
    pub location: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_accepted_when_named_with_positive_years() {
        let skill = Skill {
            name: "React".to_string(),
            years: 2.0,
            last_used: None,
            level: 5,
        };
        assert!(skill.validate().is_ok());
    }

    #[test]
    fn test_skill_rejected_on_empty_name() {
        let skill = Skill {
            name: String::new(),
            years: 2.0,
            ..Skill::default()
        };
        assert_eq!(skill.validate(), Err("Please enter a skill name"));
    }

    #[test]
    fn test_skill_rejected_on_whitespace_name() {
        let skill = Skill {
            name: "   ".to_string(),
            years: 2.0,
            ..Skill::default()
        };
        assert!(skill.validate().is_err());
    }

    #[test]
    fn test_skill_rejected_on_zero_years() {
        let skill = Skill {
            name: "React".to_string(),
            years: 0.0,
            ..Skill::default()
        };
        assert_eq!(
            skill.validate(),
            Err("Please enter years of experience (greater than 0)")
        );
    }

    #[test]
    fn test_skill_rejected_on_negative_years() {
        let skill = Skill {
            name: "React".to_string(),
            years: -1.5,
            ..Skill::default()
        };
        assert!(skill.validate().is_err());
    }

    #[test]
    fn test_skill_default_level_is_midpoint() {
        assert_eq!(Skill::default().level, 5);
    }

    #[test]
    fn test_project_requires_title_and_description() {
        let mut project = Project::default();
        assert_eq!(project.validate(), Err("Please enter a project title"));

        project.title = "E-commerce Platform".to_string();
        assert_eq!(
            project.validate(),
            Err("Please enter a project description")
        );

        project.description = "Full-stack storefront with payments".to_string();
        assert!(project.validate().is_ok());
    }

    #[test]
    fn test_education_requires_degree_and_institution() {
        let mut education = Education::default();
        assert_eq!(education.validate(), Err("Please enter a degree"));

        education.degree = "B.S. Computer Science".to_string();
        assert_eq!(education.validate(), Err("Please enter an institution"));

        education.institution = "Stanford University".to_string();
        assert!(education.validate().is_ok());
    }

    #[test]
    fn test_submit_blocked_without_skills() {
        let draft = ProfileDraft::default();
        assert!(draft.submit_blocked());
    }

    #[test]
    fn test_submit_allowed_with_one_skill() {
        let draft = ProfileDraft {
            skills: vec![Skill {
                name: "Rust".to_string(),
                years: 3.0,
                ..Skill::default()
            }],
            ..ProfileDraft::default()
        };
        assert!(!draft.submit_blocked());
    }

    #[test]
    fn test_draft_serializes_without_resume_field() {
        let draft = ProfileDraft {
            name: "Ada".to_string(),
            ..ProfileDraft::default()
        };
        let json = serde_json::to_string(&draft).unwrap();
        assert!(json.contains("\"name\":\"Ada\""));
        assert!(!json.contains("resume"));
    }

    #[test]
    fn test_optional_fields_skipped_when_absent() {
        let skill = Skill {
            name: "Go".to_string(),
            years: 1.0,
            ..Skill::default()
        };
        let json = serde_json::to_string(&skill).unwrap();
        assert!(!json.contains("last_used"));

        let education = Education {
            degree: "M.S.".to_string(),
            institution: "MIT".to_string(),
            year: None,
        };
        let json = serde_json::to_string(&education).unwrap();
        assert!(!json.contains("year"));
    }

    #[test]
    fn test_profile_deserializes_with_missing_fields() {
        let profile: Profile = serde_json::from_str(r#"{"roles":["Backend"]}"#).unwrap();
        assert_eq!(profile.roles, vec!["Backend".to_string()]);
        assert!(profile.skills.is_empty());
    }
}
