use std::env;

use crate::domain::WorkflowCatalog;
use crate::error::{AppError, AppResult};

const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_OPENAI_MODEL: &str = "gpt-4";
const DEFAULT_PORT: u16 = 8080;

/// Process configuration, read once at startup and passed into components.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub openai_model: String,
    pub uac_api_url: String,
    pub uac_api_token: String,
    pub jira_base_url: String,
    pub jira_user_email: String,
    pub jira_api_token: String,
    pub jira_done_transition_id: String,
    pub catalog: WorkflowCatalog,
    /// When set, a failed comment or transition fails the whole pipeline
    /// instead of being logged and tolerated.
    pub strict_reporting: bool,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> AppResult<Self> {
        let catalog = match env::var("WORKFLOW_CATALOG") {
            Ok(raw) => WorkflowCatalog::from_json(&raw)?,
            Err(_) => WorkflowCatalog::builtin(),
        };

        let port = match env::var("PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|_| {
                AppError::Configuration(format!("PORT must be a port number, got '{raw}'"))
            })?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            openai_api_key: required("OPENAI_API_KEY")?,
            openai_base_url: optional("OPENAI_BASE_URL", DEFAULT_OPENAI_BASE_URL),
            openai_model: optional("OPENAI_MODEL", DEFAULT_OPENAI_MODEL),
            uac_api_url: required("UAC_API_URL")?,
            uac_api_token: required("UAC_API_TOKEN")?,
            jira_base_url: required("JIRA_BASE_URL")?,
            jira_user_email: required("JIRA_USER_EMAIL")?,
            jira_api_token: required("JIRA_API_TOKEN")?,
            jira_done_transition_id: required("JIRA_DONE_TRANSITION_ID")?,
            catalog,
            strict_reporting: flag_enabled(env::var("STRICT_REPORTING").ok().as_deref()),
            port,
        })
    }
}

fn required(name: &str) -> AppResult<String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .ok_or_else(|| AppError::Configuration(format!("{name} is not set")))
}

fn optional(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn flag_enabled(raw: Option<&str>) -> bool {
    matches!(
        raw.map(|value| value.trim().to_ascii_lowercase()).as_deref(),
        Some("1") | Some("true") | Some("yes")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_enabled_flag_values() {
        assert!(flag_enabled(Some("1")));
        assert!(flag_enabled(Some("true")));
        assert!(flag_enabled(Some(" YES ")));
    }

    #[test]
    fn treats_other_values_as_disabled() {
        assert!(!flag_enabled(None));
        assert!(!flag_enabled(Some("0")));
        assert!(!flag_enabled(Some("false")));
        assert!(!flag_enabled(Some("")));
    }
}
