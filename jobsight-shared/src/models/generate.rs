use serde::{Deserialize, Serialize};
use std::fmt;
use strum::EnumIter;

/// The three kinds of application material the backend can generate.
///
/// At most one generation per kind is in flight at a time; the dashboard
/// tracks the generating kind to disable only the matching trigger.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    /// Optimized resume content for a target role.
    Resume,
    /// Cover letter for a specific company and position.
    CoverLetter,
    /// Cold outreach email to a recruiter.
    ColdEmail,
}

impl ContentKind {
    /// API path segment for the generation endpoint.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Resume => "generate/resume",
            Self::CoverLetter => "generate/cover-letter",
            Self::ColdEmail => "generate/cold-email",
        }
    }

    /// Human-readable label for UI headings.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Resume => "Resume",
            Self::CoverLetter => "Cover Letter",
            Self::ColdEmail => "Cold Email",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Request body for `POST /generate/resume`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResumeRequest {
    /// Target job role.
    pub job_role: String,
}

/// Request body for `POST /generate/cover-letter`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CoverLetterRequest {
    /// Company being applied to.
    pub company: String,

    /// Position being applied for.
    pub position: String,

    /// Pasted job description, may be empty.
    pub job_description: String,
}

/// Request body for `POST /generate/cold-email`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ColdEmailRequest {
    /// Recruiter's name, may be empty.
    pub recruiter_name: String,

    /// Target company.
    pub company: String,
}

/// Response body shared by all three generation endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeneratedContent {
    /// The generated text.
    pub content: String,
}
