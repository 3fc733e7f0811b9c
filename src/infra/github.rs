use async_trait::async_trait;
use reqwest::{
    Client, StatusCode,
    header::{ACCEPT, AUTHORIZATION, USER_AGENT},
};
use serde::{Deserialize, Serialize};

use crate::domain::pull_request::{PullRequestRequest, PullRequestResult};
use crate::domain::repo::RepoCoordinates;
use crate::error::{AppError, AppResult};
use crate::services::PullRequestService;

const GITHUB_API_BASE: &str = "https://api.github.com";
const API_VERSION: &str = "2022-11-28";
// GitHub rejects requests without a User-Agent.
const AGENT: &str = concat!("jira-pr/", env!("CARGO_PKG_VERSION"));

pub struct GitHubClient {
    http: Client,
    api_base: String,
    token: String,
}

impl GitHubClient {
    pub fn new(token: String) -> Self {
        Self::with_api_base(token, GITHUB_API_BASE.to_string())
    }

    fn with_api_base(token: String, api_base: String) -> Self {
        Self {
            http: Client::new(),
            api_base,
            token,
        }
    }

    fn pulls_endpoint(&self, coordinates: &RepoCoordinates) -> String {
        format!(
            "{}/repos/{}/{}/pulls",
            self.api_base.trim_end_matches('/'),
            coordinates.owner,
            coordinates.repo
        )
    }
}

#[async_trait]
impl PullRequestService for GitHubClient {
    async fn create(
        &self,
        coordinates: &RepoCoordinates,
        request: &PullRequestRequest,
    ) -> AppResult<PullRequestResult> {
        let response = self
            .http
            .post(self.pulls_endpoint(coordinates))
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .header(ACCEPT, "application/vnd.github+json")
            .header("X-GitHub-Api-Version", API_VERSION)
            .header(USER_AGENT, AGENT)
            .json(&CreatePullRequestBody::new(request))
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::CREATED {
            // Surface the raw API error text so the user can diagnose
            // without re-running.
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unable to read response>".to_string());
            return Err(AppError::PrCreation {
                status: status.as_u16(),
                body,
            });
        }

        let payload: CreatePullRequestResponse = response
            .json()
            .await
            .map_err(|err| AppError::Decode(format!("GitHub pull request response: {err}")))?;

        Ok(PullRequestResult { url: payload.url })
    }
}

#[derive(Serialize)]
struct CreatePullRequestBody<'a> {
    title: &'a str,
    body: &'a str,
    head: &'a str,
    base: &'a str,
    draft: bool,
}

impl<'a> CreatePullRequestBody<'a> {
    fn new(request: &'a PullRequestRequest) -> Self {
        Self {
            title: &request.title,
            body: &request.body,
            head: &request.head,
            base: &request.base,
            draft: request.draft,
        }
    }
}

#[derive(Deserialize)]
struct CreatePullRequestResponse {
    url: String,
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::domain::branch::BranchPair;

    fn coordinates() -> RepoCoordinates {
        RepoCoordinates {
            owner: "acme".to_string(),
            repo: "widget".to_string(),
        }
    }

    fn request() -> PullRequestRequest {
        PullRequestRequest::from_issue(
            "https://jira.example.com",
            "PROJ-42",
            "Fix login bug",
            BranchPair {
                head: "fix/PROJ-42-login".to_string(),
                base: "main".to_string(),
            },
        )
    }

    fn client(server: &MockServer) -> GitHubClient {
        GitHubClient::with_api_base("gh-token".to_string(), server.uri())
    }

    #[tokio::test]
    async fn creates_draft_pull_request() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/repos/acme/widget/pulls"))
            .and(header("Authorization", "Bearer gh-token"))
            .and(header("Accept", "application/vnd.github+json"))
            .and(header("X-GitHub-Api-Version", "2022-11-28"))
            .and(body_json(serde_json::json!({
                "title": "[PROJ-42] Fix login bug",
                "body": "https://jira.example.com/browse/PROJ-42",
                "head": "fix/PROJ-42-login",
                "base": "main",
                "draft": true
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "url": "https://api.github.com/repos/acme/widget/pulls/7"
            })))
            .mount(&server)
            .await;

        let created = client(&server)
            .create(&coordinates(), &request())
            .await
            .unwrap();
        assert_eq!(
            created.url,
            "https://api.github.com/repos/acme/widget/pulls/7"
        );
    }

    #[tokio::test]
    async fn non_201_status_preserves_response_body() {
        let server = MockServer::start().await;
        let error_body = r#"{"message":"Validation Failed"}"#;

        Mock::given(method("POST"))
            .and(path("/repos/acme/widget/pulls"))
            .respond_with(ResponseTemplate::new(422).set_body_string(error_body))
            .mount(&server)
            .await;

        let err = client(&server)
            .create(&coordinates(), &request())
            .await
            .unwrap_err();
        match err {
            AppError::PrCreation { status, body } => {
                assert_eq!(status, 422);
                assert_eq!(body, error_body);
            }
            other => panic!("expected PR creation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn a_200_response_is_not_success() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/repos/acme/widget/pulls"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "url": "https://api.github.com/repos/acme/widget/pulls/7"
            })))
            .mount(&server)
            .await;

        let err = client(&server)
            .create(&coordinates(), &request())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::PrCreation { status: 200, .. }));
    }
}
