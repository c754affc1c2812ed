//! Frontend configuration module
//!
//! Centralizes the backend base URL; everything else about the client is
//! derived from it at startup.

/// Frontend configuration for backend URLs.
#[derive(Debug, Clone)]
pub struct FrontendConfig {
    /// Backend origin; empty means same-origin.
    pub backend_url: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            backend_url: option_env!("JOBSIGHT_BACKEND_URL")
                .unwrap_or("")
                .to_string(),
        }
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// The prefix every API path hangs off of: `<backend>/api`.
    pub fn api_base(&self) -> String {
        format!("{}/api", self.backend_url.trim_end_matches('/'))
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_base_same_origin_by_default() {
        let config = FrontendConfig {
            backend_url: String::new(),
        };
        assert_eq!(config.api_base(), "/api");
    }

    #[test]
    fn test_api_base_strips_trailing_slash() {
        let config = FrontendConfig {
            backend_url: "https://api.jobsight.dev/".to_string(),
        };
        assert_eq!(config.api_base(), "https://api.jobsight.dev/api");
    }

    #[test]
    fn test_frontend_config_clone() {
        let config1 = FrontendConfig::new();
        let config2 = config1.clone();
        assert_eq!(config1.backend_url, config2.backend_url);
    }
}
