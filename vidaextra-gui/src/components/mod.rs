pub mod dashboard;
pub mod onboarding;
