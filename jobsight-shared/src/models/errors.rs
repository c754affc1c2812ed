use serde::{Deserialize, Serialize};

/// An error body as reported by the backend.
///
/// The backend is not uniform: profile endpoints report failures under
/// `detail`, while the analysis pipeline surfaces provider errors under
/// `error`/`message` with an optional `type` tag. All fields are optional
/// and the accessors below pick the right one per call site.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// Human-readable failure detail (profile and auth endpoints).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    /// Provider error string (analysis pipeline).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Generic message field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Machine-readable error tag, e.g. `insufficient_quota`.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl ErrorResponse {
    /// Creates an error response carrying only a `detail` message.
    #[must_use]
    pub fn from_detail(detail: impl Into<String>) -> Self {
        Self {
            detail: Some(detail.into()),
            ..Self::default()
        }
    }

    /// The best user-facing message: `detail`, then `message`, then `error`.
    #[must_use]
    pub fn detail_message(&self) -> Option<&str> {
        self.detail
            .as_deref()
            .or(self.message.as_deref())
            .or(self.error.as_deref())
    }

    /// The provider-facing message the analysis classifier inspects:
    /// `error`, then `message`, then empty.
    #[must_use]
    pub fn provider_message(&self) -> &str {
        self.error
            .as_deref()
            .or(self.message.as_deref())
            .unwrap_or("")
    }
}

impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.detail_message() {
            Some(message) => f.write_str(message),
            None => f.write_str("request failed"),
        }
    }
}

impl std::error::Error for ErrorResponse {}

/// Classified failure of an analysis run, used to pick user guidance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisFailure {
    /// The AI provider's quota or billing is exhausted.
    QuotaExhausted,
    /// The configured provider API key is invalid.
    InvalidApiKey,
    /// Anything else; carries the message to show.
    Other(String),
}

impl AnalysisFailure {
    /// Classify an analysis failure from the server error body, if any.
    ///
    /// Matching is by substring and `type` tag, mirroring what the provider
    /// actually returns; unknown shapes fall back to the raw message or the
    /// generic default.
    #[must_use]
    pub fn classify(body: Option<&ErrorResponse>) -> Self {
        let message = body.map(ErrorResponse::provider_message).unwrap_or("");
        let kind = body.and_then(|b| b.kind.as_deref()).unwrap_or("");

        if message.contains("insufficient_quota")
            || message.contains("quota")
            || kind == "insufficient_quota"
        {
            Self::QuotaExhausted
        } else if message.contains("invalid_api_key") || message.contains("Incorrect API key") {
            Self::InvalidApiKey
        } else if message.is_empty() {
            Self::Other("Failed to run analysis".to_string())
        } else {
            Self::Other(message.to_string())
        }
    }

    /// The guidance shown to the user for this failure.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::QuotaExhausted => {
                "AI provider quota exhausted. Please add a payment method or check your usage limits."
            }
            Self::InvalidApiKey => {
                "Invalid AI provider API key. Please update the API key configured on the server."
            }
            Self::Other(message) => message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_message_prefers_detail() {
        let body = ErrorResponse {
            detail: Some("Profile already exists".to_string()),
            message: Some("other".to_string()),
            ..ErrorResponse::default()
        };
        assert_eq!(body.detail_message(), Some("Profile already exists"));
    }

    #[test]
    fn test_detail_message_falls_back() {
        let body = ErrorResponse {
            error: Some("boom".to_string()),
            ..ErrorResponse::default()
        };
        assert_eq!(body.detail_message(), Some("boom"));
        assert!(ErrorResponse::default().detail_message().is_none());
    }

    #[test]
    fn test_from_detail_display() {
        let body = ErrorResponse::from_detail("Failed to create profile");
        assert_eq!(format!("{body}"), "Failed to create profile");
    }

    #[test]
    fn test_classify_quota_by_substring() {
        let body = ErrorResponse {
            error: Some("You exceeded your current quota".to_string()),
            ..ErrorResponse::default()
        };
        assert_eq!(
            AnalysisFailure::classify(Some(&body)),
            AnalysisFailure::QuotaExhausted
        );
    }

    #[test]
    fn test_classify_quota_by_type_tag() {
        let body = ErrorResponse {
            kind: Some("insufficient_quota".to_string()),
            ..ErrorResponse::default()
        };
        assert_eq!(
            AnalysisFailure::classify(Some(&body)),
            AnalysisFailure::QuotaExhausted
        );
    }

    #[test]
    fn test_classify_invalid_key() {
        let body = ErrorResponse {
            message: Some("Incorrect API key provided: sk-...".to_string()),
            ..ErrorResponse::default()
        };
        assert_eq!(
            AnalysisFailure::classify(Some(&body)),
            AnalysisFailure::InvalidApiKey
        );

        let body = ErrorResponse {
            error: Some("invalid_api_key".to_string()),
            ..ErrorResponse::default()
        };
        assert_eq!(
            AnalysisFailure::classify(Some(&body)),
            AnalysisFailure::InvalidApiKey
        );
    }

    #[test]
    fn test_classify_falls_back_to_raw_message() {
        let body = ErrorResponse {
            error: Some("model overloaded".to_string()),
            ..ErrorResponse::default()
        };
        assert_eq!(
            AnalysisFailure::classify(Some(&body)),
            AnalysisFailure::Other("model overloaded".to_string())
        );
    }

    #[test]
    fn test_classify_without_body_is_generic() {
        let failure = AnalysisFailure::classify(None);
        assert_eq!(
            failure,
            AnalysisFailure::Other("Failed to run analysis".to_string())
        );
        assert_eq!(failure.user_message(), "Failed to run analysis");
    }

    #[test]
    fn test_error_body_deserializes_type_field() {
        let body: ErrorResponse =
            serde_json::from_str(r#"{"type":"insufficient_quota","error":"quota"}"#).unwrap();
        assert_eq!(body.kind.as_deref(), Some("insufficient_quota"));
    }
}
