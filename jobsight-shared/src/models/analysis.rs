use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use strum::EnumIter;

/// Target job domains the backend can analyze against.
///
/// The set is fixed; the dashboard's domain selector iterates it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, EnumIter, Default)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    /// Web development.
    #[default]
    Web,
    /// Data science.
    Data,
    /// Cloud engineering.
    Cloud,
    /// Mobile development.
    Mobile,
}

impl Domain {
    /// Canonical wire representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Data => "data",
            Self::Cloud => "cloud",
            Self::Mobile => "mobile",
        }
    }

    /// Human-readable label for the domain selector.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Web => "Web Development",
            Self::Data => "Data Science",
            Self::Cloud => "Cloud Engineering",
            Self::Mobile => "Mobile Development",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Domain {
    type Err = &'static str;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "web" => Ok(Self::Web),
            "data" => Ok(Self::Data),
            "cloud" => Ok(Self::Cloud),
            "mobile" => Ok(Self::Mobile),
            _ => Err("unknown domain"),
        }
    }
}

/// Request body for `POST /analyze`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalyzeRequest {
    /// Target domain to score against.
    pub domain: Domain,

    /// Target role; omitted when neither an override nor a profile role
    /// exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Request body for `POST /analyze/refresh-template`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RefreshTemplateRequest {
    /// Target domain.
    pub domain: Domain,

    /// Resolved role (may be empty when the profile lists none).
    pub role: String,
}

/// Response body for `POST /analyze/refresh-template`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RefreshTemplateResponse {
    /// The refreshed template, when the backend produced one.
    #[serde(default)]
    pub template: Option<MarketTemplate>,
}

/// Backend-computed keyword/trend snapshot for a domain/role.
///
/// Arrives either embedded in an [`Analysis`] or standalone from the
/// refresh endpoint; the last-fetched value wins wholesale, no merging.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct MarketTemplate {
    /// Most in-demand keywords for the role.
    #[serde(default)]
    pub top_keywords: Vec<String>,

    /// When the snapshot was generated; opaque, displayed verbatim.
    #[serde(default)]
    pub generated_at: Option<String>,

    /// Role the snapshot was computed for.
    #[serde(default)]
    pub role: Option<String>,

    /// Domain the snapshot was computed for.
    #[serde(default)]
    pub domain: Option<String>,
}

/// Per-factor breakdown of the readiness score.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoreBreakdown {
    /// Skill-match contribution, at most 40 points.
    pub skill_match: f64,

    /// Experience contribution, at most 30 points.
    pub experience: f64,

    /// Recency contribution, at most 15 points.
    pub recency: f64,

    /// Projects contribution, at most 15 points.
    pub projects: f64,

    /// Number of required skills the profile matched.
    pub matched_skills_count: u32,

    /// Total number of skills the domain requires.
    pub total_required_skills: u32,
}

/// Matched skills grouped by tier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CategoryResults {
    /// Skills every candidate is expected to have.
    pub bare_minimum: Vec<String>,

    /// Skills that lift a candidate past entry level.
    pub intermediate: Vec<String>,

    /// Skills that make a candidate stand out.
    pub standout: Vec<String>,
}

/// A single step of the learning roadmap.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoadmapStep {
    /// What to learn or build.
    pub step: String,

    /// Estimated effort in weeks.
    #[serde(rename = "estimateWeeks")]
    pub estimate_weeks: f64,

    /// Link to a learning resource.
    pub resource: String,
}

/// The backend-computed readiness analysis for a domain/role.
///
/// Held by the dashboard and replaced wholesale on every successful run;
/// never mutated in place.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Analysis {
    /// Overall readiness score, 0-100.
    pub level: f64,

    /// Per-factor score breakdown.
    pub score_breakdown: ScoreBreakdown,

    /// Matched skills grouped by tier.
    pub category_results: CategoryResults,

    /// Required skills the profile is missing.
    #[serde(default)]
    pub missing_skills: Vec<String>,

    /// Suggested learning roadmap.
    #[serde(default)]
    pub roadmap: Vec<RoadmapStep>,

    /// Domain the analysis was run against.
    pub domain: String,

    /// Market snapshot computed alongside the analysis, when available.
    #[serde(default)]
    pub market_template: Option<MarketTemplate>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_domain_wire_format() {
        assert_eq!(serde_json::to_string(&Domain::Web).unwrap(), "\"web\"");
        assert_eq!(serde_json::to_string(&Domain::Data).unwrap(), "\"data\"");
        assert_eq!(
            serde_json::from_str::<Domain>("\"mobile\"").unwrap(),
            Domain::Mobile
        );
    }

    #[test]
    fn test_domain_round_trips_through_str() {
        for domain in Domain::iter() {
            assert_eq!(domain.as_str().parse::<Domain>().unwrap(), domain);
        }
    }

    #[test]
    fn test_domain_rejects_unknown() {
        assert!("gamedev".parse::<Domain>().is_err());
    }

    #[test]
    fn test_analyze_request_omits_empty_role() {
        let request = AnalyzeRequest {
            domain: Domain::Web,
            role: None,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"domain":"web"}"#);

        let request = AnalyzeRequest {
            domain: Domain::Web,
            role: Some("Backend".to_string()),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"role\":\"Backend\""));
    }

    #[test]
    fn test_roadmap_step_wire_name() {
        let json = r#"{"step":"Learn TypeScript","estimateWeeks":3,"resource":"https://example.com"}"#;
        let step: RoadmapStep = serde_json::from_str(json).unwrap();
        assert_eq!(step.step, "Learn TypeScript");
        assert!((step.estimate_weeks - 3.0).abs() < f64::EPSILON);

        let out = serde_json::to_string(&step).unwrap();
        assert!(out.contains("estimateWeeks"));
        assert!(!out.contains("estimate_weeks"));
    }

    #[test]
    fn test_analysis_deserializes_full_body() {
        let json = r#"{
            "level": 62,
            "score_breakdown": {
                "skill_match": 28,
                "experience": 18,
                "recency": 9,
                "projects": 7,
                "matched_skills_count": 6,
                "total_required_skills": 10
            },
            "category_results": {
                "bare_minimum": ["HTML", "CSS"],
                "intermediate": ["React"],
                "standout": []
            },
            "missing_skills": ["GraphQL"],
            "roadmap": [
                {"step": "Learn GraphQL", "estimateWeeks": 2, "resource": "https://graphql.org"}
            ],
            "domain": "web",
            "market_template": {
                "top_keywords": ["react", "typescript"],
                "generated_at": "2025-06-01T00:00:00Z",
                "role": "Frontend Developer",
                "domain": "web"
            }
        }"#;

        let analysis: Analysis = serde_json::from_str(json).unwrap();
        assert!((analysis.level - 62.0).abs() < f64::EPSILON);
        assert_eq!(analysis.score_breakdown.matched_skills_count, 6);
        assert_eq!(analysis.category_results.bare_minimum.len(), 2);
        assert_eq!(analysis.missing_skills, vec!["GraphQL".to_string()]);
        assert_eq!(analysis.roadmap.len(), 1);
        let template = analysis.market_template.as_ref().unwrap();
        assert_eq!(template.top_keywords.len(), 2);
    }

    #[test]
    fn test_analysis_tolerates_missing_template() {
        let json = r#"{
            "level": 10,
            "score_breakdown": {
                "skill_match": 5, "experience": 3, "recency": 1, "projects": 1,
                "matched_skills_count": 1, "total_required_skills": 10
            },
            "category_results": {"bare_minimum": [], "intermediate": [], "standout": []},
            "domain": "data"
        }"#;
        let analysis: Analysis = serde_json::from_str(json).unwrap();
        assert!(analysis.market_template.is_none());
        assert!(analysis.roadmap.is_empty());
        assert!(analysis.missing_skills.is_empty());
    }

    #[test]
    fn test_refresh_template_response_without_template() {
        let response: RefreshTemplateResponse = serde_json::from_str("{}").unwrap();
        assert!(response.template.is_none());
    }
}
