use std::env;

use crate::error::{AppError, AppResult};

/// Everything the run needs, resolved once at startup. Nothing reads the
/// environment after this is built.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub issue_key: String,
    pub base_override: Option<String>,
    pub jira_base_url: String,
    pub jira_email: String,
    pub jira_api_token: String,
    pub github_token: String,
}

impl AppConfig {
    pub fn load(issue_key: String, base_override: Option<String>) -> AppResult<Self> {
        Self::from_lookup(issue_key, base_override, |name| env::var(name).ok())
    }

    fn from_lookup(
        issue_key: String,
        base_override: Option<String>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> AppResult<Self> {
        let mut missing = Vec::new();

        let issue_key = issue_key.trim().to_string();
        if issue_key.is_empty() {
            missing.push("issue key (--issue)");
        }

        let jira_base_url = required(&lookup, "JIRA_BASE_URL", &mut missing);
        let jira_email = required(&lookup, "JIRA_EMAIL", &mut missing);
        let jira_api_token = required(&lookup, "JIRA_API_TOKEN", &mut missing);
        let github_token = required(&lookup, "GITHUB_TOKEN", &mut missing);

        if !missing.is_empty() {
            return Err(AppError::Configuration(format!(
                "missing required values: {}",
                missing.join(", ")
            )));
        }

        // An empty --base means "discover the default branch", not an error.
        let base_override = base_override
            .map(|base| base.trim().to_string())
            .filter(|base| !base.is_empty());

        Ok(Self {
            issue_key,
            base_override,
            jira_base_url: jira_base_url.unwrap_or_default(),
            jira_email: jira_email.unwrap_or_default(),
            jira_api_token: jira_api_token.unwrap_or_default(),
            github_token: github_token.unwrap_or_default(),
        })
    }
}

fn required(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    missing: &mut Vec<&'static str>,
) -> Option<String> {
    match lookup(name) {
        Some(value) if !value.trim().is_empty() => Some(value.trim().to_string()),
        _ => {
            missing.push(name);
            None
        }
    }
}
