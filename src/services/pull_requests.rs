use async_trait::async_trait;

use crate::domain::pull_request::{PullRequestRequest, PullRequestResult};
use crate::domain::repo::RepoCoordinates;
use crate::error::AppResult;

#[async_trait]
pub trait PullRequestService: Send + Sync {
    async fn create(
        &self,
        coordinates: &RepoCoordinates,
        request: &PullRequestRequest,
    ) -> AppResult<PullRequestResult>;
}
