use shared::models::{
    Analysis, ColdEmailRequest, ContentKind, CoverLetterRequest, MarketTemplate, Profile,
    ResumeRequest,
};

/// Resolve the role sent with analysis and template requests: the trimmed
/// override wins; otherwise the profile's first listed role.
pub fn resolve_role(override_input: &str, profile: Option<&Profile>) -> Option<String> {
    let trimmed = override_input.trim();
    if !trimmed.is_empty() {
        return Some(trimmed.to_string());
    }
    profile.and_then(|p| p.roles.first().cloned())
}

/// Pick the market template to render.
///
/// The standalone slot is written by both refresh-template and run-analysis,
/// so when present it is always the most recent value; the copy embedded in
/// the analysis only covers the case where `/analysis/latest` was loaded and
/// no refresh has happened yet.
pub fn effective_template<'a>(
    standalone: Option<&'a MarketTemplate>,
    analysis: Option<&'a Analysis>,
) -> Option<&'a MarketTemplate> {
    standalone.or_else(|| analysis.and_then(|a| a.market_template.as_ref()))
}

/// Whether the generate trigger for `kind` must be disabled. Only the
/// trigger matching the in-flight kind locks; the others stay interactive.
pub fn trigger_disabled(generating: Option<ContentKind>, kind: ContentKind) -> bool {
    generating == Some(kind)
}

/// Build the resume request, defaulting an empty role.
pub fn resume_request(job_role: &str) -> ResumeRequest {
    ResumeRequest {
        job_role: non_empty_or(job_role, "Software Developer"),
    }
}

/// Build the cover-letter request, defaulting empty company/position.
pub fn cover_letter_request(company: &str, position: &str, job_description: &str) -> CoverLetterRequest {
    CoverLetterRequest {
        company: non_empty_or(company, "the company"),
        position: non_empty_or(position, "Software Developer"),
        job_description: job_description.to_string(),
    }
}

/// Build the cold-email request, defaulting an empty company.
pub fn cold_email_request(recruiter_name: &str, company: &str) -> ColdEmailRequest {
    ColdEmailRequest {
        recruiter_name: recruiter_name.to_string(),
        company: non_empty_or(company, "your company"),
    }
}

fn non_empty_or(value: &str, fallback: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}
