/// Summary field of a Jira issue, used only to build the PR title.
#[derive(Debug, Clone)]
pub struct IssueSummary(pub String);

impl IssueSummary {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
