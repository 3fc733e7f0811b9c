use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::{GitInspector, IssueTrackerService, PullRequestService};

#[derive(Clone)]
pub struct AppContext {
    pub config: AppConfig,
    pub git: Arc<dyn GitInspector>,
    pub issue_tracker: Arc<dyn IssueTrackerService>,
    pub pull_requests: Arc<dyn PullRequestService>,
}

impl AppContext {
    pub fn new(
        config: AppConfig,
        git: Arc<dyn GitInspector>,
        issue_tracker: Arc<dyn IssueTrackerService>,
        pull_requests: Arc<dyn PullRequestService>,
    ) -> Self {
        Self {
            config,
            git,
            issue_tracker,
            pull_requests,
        }
    }
}
