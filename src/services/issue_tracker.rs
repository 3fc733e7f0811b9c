use async_trait::async_trait;

use crate::domain::issue::IssueSummary;
use crate::error::AppResult;

#[async_trait]
pub trait IssueTrackerService: Send + Sync {
    async fn fetch_summary(&self, issue_key: &str) -> AppResult<IssueSummary>;
}
