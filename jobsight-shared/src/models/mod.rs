//! Data models exchanged with the JobSight backend.

pub mod analysis;
pub mod errors;
pub mod generate;
pub mod profile;
pub mod user;

pub use analysis::{
    Analysis, AnalyzeRequest, CategoryResults, Domain, MarketTemplate, RefreshTemplateRequest,
    RefreshTemplateResponse, RoadmapStep, ScoreBreakdown,
};
pub use errors::{AnalysisFailure, ErrorResponse};
pub use generate::{
    ColdEmailRequest, ContentKind, CoverLetterRequest, GeneratedContent, ResumeRequest,
};
pub use profile::{Education, Profile, ProfileDraft, Project, Skill};
pub use user::{AuthResponse, LoginRequest, RegisterRequest, User};
