pub mod onboarding;

pub use onboarding::{OnboardingOutcome, ReportOutcome, SideEffect, run_onboarding};
