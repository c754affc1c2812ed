pub mod app_state;
pub mod dashboard;
pub mod onboarding;
