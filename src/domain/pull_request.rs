use crate::domain::branch::BranchPair;

/// The pull request payload, assembled once and never mutated after send.
#[derive(Debug, Clone)]
pub struct PullRequestRequest {
    pub title: String,
    pub body: String,
    pub head: String,
    pub base: String,
    pub draft: bool,
}

impl PullRequestRequest {
    /// Title is the bracketed issue key followed by the Jira summary; body is
    /// a deep link back to the issue. PRs always open as drafts.
    pub fn from_issue(
        jira_base_url: &str,
        issue_key: &str,
        summary: &str,
        branches: BranchPair,
    ) -> Self {
        Self {
            title: format!("[{issue_key}] {summary}"),
            body: format!(
                "{}/browse/{}",
                jira_base_url.trim_end_matches('/'),
                issue_key
            ),
            head: branches.head,
            base: branches.base,
            draft: true,
        }
    }
}

/// The created pull request, present only on success.
#[derive(Debug, Clone)]
pub struct PullRequestResult {
    pub url: String,
}
