use crate::config::FrontendConfig;
use once_cell::unsync::OnceCell;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use shared::models::{
    Analysis, AnalyzeRequest, AuthResponse, ColdEmailRequest, CoverLetterRequest, ErrorResponse,
    GeneratedContent, LoginRequest, Profile, ProfileDraft, RefreshTemplateRequest,
    RefreshTemplateResponse, RegisterRequest, ResumeRequest, User,
};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Analysis runs drive a long AI computation on the server.
const ANALYZE_TIMEOUT: Duration = Duration::from_secs(120);

thread_local! {
    static SHARED_CLIENT: OnceCell<JobSightClient> = const { OnceCell::new() };
}

/// Error produced by any backend call.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a usable response.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status and (possibly) an
    /// error body.
    #[error("{body}")]
    Server {
        /// HTTP status of the response.
        status: StatusCode,
        /// Decoded error body; empty when the server sent none.
        body: ErrorResponse,
    },

    /// The request payload could not be serialized.
    #[error("failed to encode request: {0}")]
    Encode(#[from] serde_json::Error),
}

impl ApiError {
    /// The server-reported error body, when one exists.
    pub fn server_body(&self) -> Option<&ErrorResponse> {
        match self {
            Self::Server { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Whether the server rejected the request as unauthenticated.
    pub fn is_unauthorized(&self) -> bool {
        match self {
            Self::Server { status, .. } => *status == StatusCode::UNAUTHORIZED,
            Self::Transport(err) => err.status() == Some(StatusCode::UNAUTHORIZED),
            Self::Encode(_) => false,
        }
    }

    /// Server detail message when present, otherwise the given fallback.
    pub fn detail_or(&self, fallback: &str) -> String {
        self.server_body()
            .and_then(ErrorResponse::detail_message)
            .unwrap_or(fallback)
            .to_string()
    }
}

/// A resume file staged for the multipart profile submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeUpload {
    /// Original file name.
    pub file_name: String,
    /// MIME type reported by the browser; may be empty.
    pub mime_type: String,
    /// Raw file contents.
    pub bytes: Vec<u8>,
}

/// API client for all JobSight backend interactions.
///
/// One shared instance per app; every request goes out with cookie
/// credentials attached. A bearer-token slot exists for deployments that
/// prefer header auth, but nothing sets it by default.
#[derive(Clone, Debug)]
pub struct JobSightClient {
    base_url: String,
    client: Client,
    auth_token: Arc<Mutex<Option<String>>>,
}

impl JobSightClient {
    /// Create a new API client rooted at the provided base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
            auth_token: Arc::new(Mutex::new(None)),
        }
    }

    /// The app-wide shared client.
    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| {
            cell.get_or_init(|| Self::new(&FrontendConfig::new().api_base()))
                .clone()
        })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Install or clear the optional bearer token.
    pub fn set_auth_token(&self, token: Option<String>) {
        if let Ok(mut guard) = self.auth_token.lock() {
            *guard = token;
        }
    }

    fn current_auth_token(&self) -> Option<String> {
        self.auth_token
            .lock()
            .ok()
            .and_then(|guard| guard.as_ref().cloned())
    }

    fn apply_auth(&self, request: RequestBuilder) -> RequestBuilder {
        if let Some(token) = self.current_auth_token() {
            request.bearer_auth(token)
        } else {
            request
        }
    }

    fn get(&self, path: &str) -> RequestBuilder {
        self.apply_auth(with_credentials(self.client.get(self.api_url(path))))
    }

    fn post(&self, path: &str) -> RequestBuilder {
        self.apply_auth(with_credentials(self.client.post(self.api_url(path))))
    }

    async fn check(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.json::<ErrorResponse>().await.unwrap_or_default();
        Err(ApiError::Server { status, body })
    }

    /// Resolve the current session: `GET /auth/me`.
    pub async fn me(&self) -> Result<User, ApiError> {
        let response = Self::check(self.get("auth/me").send().await?).await?;
        Ok(response.json().await?)
    }

    /// Authenticate with credentials: `POST /auth/login`.
    pub async fn login(&self, payload: &LoginRequest) -> Result<AuthResponse, ApiError> {
        let response = Self::check(self.post("auth/login").json(payload).send().await?).await?;
        Ok(response.json().await?)
    }

    /// Create an account: `POST /auth/register`.
    pub async fn register(&self, payload: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        let response = Self::check(self.post("auth/register").json(payload).send().await?).await?;
        Ok(response.json().await?)
    }

    /// Terminate the session: `POST /auth/logout`.
    pub async fn logout(&self) -> Result<(), ApiError> {
        Self::check(self.post("auth/logout").send().await?).await?;
        self.set_auth_token(None);
        Ok(())
    }

    /// Fetch the stored profile: `GET /profile`. Absent profile is `None`,
    /// not an error.
    pub async fn get_profile(&self) -> Result<Option<Profile>, ApiError> {
        let response = Self::check(self.get("profile").send().await?).await?;
        Ok(response.json().await?)
    }

    /// Submit the completed profile draft: `POST /profile` (multipart).
    ///
    /// The draft travels JSON-serialized as the `profile_data` field; the
    /// optional resume is a second binary part.
    pub async fn create_profile(
        &self,
        draft: &ProfileDraft,
        resume: Option<ResumeUpload>,
    ) -> Result<(), ApiError> {
        let mut form =
            reqwest::multipart::Form::new().text("profile_data", serde_json::to_string(draft)?);
        if let Some(upload) = resume {
            let mut part =
                reqwest::multipart::Part::bytes(upload.bytes).file_name(upload.file_name);
            if !upload.mime_type.is_empty() {
                if let Ok(typed) = part.mime_str(&upload.mime_type) {
                    part = typed;
                } else {
                    return Err(ApiError::Server {
                        status: StatusCode::BAD_REQUEST,
                        body: ErrorResponse::from_detail("Unsupported resume file type"),
                    });
                }
            }
            form = form.part("resume_file", part);
        }
        Self::check(self.post("profile").multipart(form).send().await?).await?;
        Ok(())
    }

    /// Fetch the most recent analysis: `GET /analysis/latest`. Absence is a
    /// valid state.
    pub async fn latest_analysis(&self) -> Result<Option<Analysis>, ApiError> {
        let response = Self::check(self.get("analysis/latest").send().await?).await?;
        Ok(response.json().await?)
    }

    /// Run a readiness analysis: `POST /analyze`, with the extended timeout.
    pub async fn run_analysis(&self, payload: &AnalyzeRequest) -> Result<Analysis, ApiError> {
        let request = self.post("analyze").timeout(ANALYZE_TIMEOUT).json(payload);
        let response = Self::check(request.send().await?).await?;
        Ok(response.json().await?)
    }

    /// Refresh the market template: `POST /analyze/refresh-template`.
    pub async fn refresh_template(
        &self,
        payload: &RefreshTemplateRequest,
    ) -> Result<RefreshTemplateResponse, ApiError> {
        let response = Self::check(
            self.post("analyze/refresh-template")
                .json(payload)
                .send()
                .await?,
        )
        .await?;
        Ok(response.json().await?)
    }

    /// Generate resume content: `POST /generate/resume`.
    pub async fn generate_resume(
        &self,
        payload: &ResumeRequest,
    ) -> Result<GeneratedContent, ApiError> {
        let response =
            Self::check(self.post("generate/resume").json(payload).send().await?).await?;
        Ok(response.json().await?)
    }

    /// Generate a cover letter: `POST /generate/cover-letter`.
    pub async fn generate_cover_letter(
        &self,
        payload: &CoverLetterRequest,
    ) -> Result<GeneratedContent, ApiError> {
        let response = Self::check(
            self.post("generate/cover-letter")
                .json(payload)
                .send()
                .await?,
        )
        .await?;
        Ok(response.json().await?)
    }

    /// Generate a cold email: `POST /generate/cold-email`.
    pub async fn generate_cold_email(
        &self,
        payload: &ColdEmailRequest,
    ) -> Result<GeneratedContent, ApiError> {
        let response =
            Self::check(self.post("generate/cold-email").json(payload).send().await?).await?;
        Ok(response.json().await?)
    }
}

/// Cookies ride on every request; outside the browser build there is no
/// fetch credentials mode to set.
fn with_credentials(builder: RequestBuilder) -> RequestBuilder {
    #[cfg(target_arch = "wasm32")]
    {
        builder.fetch_credentials_include()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        builder
    }
}
