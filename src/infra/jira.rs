use async_trait::async_trait;
use base64::prelude::{BASE64_STANDARD, Engine as _};
use reqwest::{
    Client, StatusCode,
    header::{ACCEPT, AUTHORIZATION},
};
use serde::Deserialize;

use crate::domain::issue::IssueSummary;
use crate::error::{AppError, AppResult};
use crate::services::IssueTrackerService;

pub struct JiraClient {
    http: Client,
    base_url: String,
    email: String,
    token: String,
}

impl JiraClient {
    pub fn new(base_url: String, email: String, token: String) -> Self {
        Self {
            http: Client::new(),
            base_url,
            email,
            token,
        }
    }

    fn auth_header(&self) -> String {
        let credentials = format!("{}:{}", self.email, self.token);
        let encoded = BASE64_STANDARD.encode(credentials);
        format!("Basic {encoded}")
    }

    fn issue_endpoint(&self, issue_key: &str) -> String {
        format!(
            "{}/rest/api/3/issue/{}",
            self.base_url.trim_end_matches('/'),
            issue_key
        )
    }
}

#[async_trait]
impl IssueTrackerService for JiraClient {
    async fn fetch_summary(&self, issue_key: &str) -> AppResult<IssueSummary> {
        let response = self
            .http
            .get(self.issue_endpoint(issue_key))
            .header(AUTHORIZATION, self.auth_header())
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(AppError::IssueFetch {
                status: status.as_u16(),
            });
        }

        let payload: JiraIssueResponse = response
            .json()
            .await
            .map_err(|err| AppError::Decode(format!("Jira issue response: {err}")))?;

        Ok(IssueSummary(payload.fields.summary))
    }
}

#[derive(Deserialize)]
struct JiraIssueResponse {
    fields: JiraIssueFields,
}

#[derive(Deserialize)]
struct JiraIssueFields {
    summary: String,
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn client(server: &MockServer) -> JiraClient {
        JiraClient::new(
            server.uri(),
            "dev@example.com".to_string(),
            "token-1".to_string(),
        )
    }

    #[tokio::test]
    async fn fetches_summary_with_basic_auth() {
        let server = MockServer::start().await;
        let expected_auth = format!(
            "Basic {}",
            BASE64_STANDARD.encode("dev@example.com:token-1")
        );

        Mock::given(method("GET"))
            .and(path("/rest/api/3/issue/PROJ-42"))
            .and(header("Authorization", expected_auth.as_str()))
            .and(header("Accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "key": "PROJ-42",
                "fields": { "summary": "Fix login bug" }
            })))
            .mount(&server)
            .await;

        let summary = client(&server).fetch_summary("PROJ-42").await.unwrap();
        assert_eq!(summary.as_str(), "Fix login bug");
    }

    #[tokio::test]
    async fn non_200_status_is_surfaced() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/rest/api/3/issue/PROJ-404"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = client(&server).fetch_summary("PROJ-404").await.unwrap_err();
        match err {
            AppError::IssueFetch { status } => assert_eq!(status, 404),
            other => panic!("expected issue fetch error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_body_is_a_decode_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/rest/api/3/issue/PROJ-42"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "fields": {} })),
            )
            .mount(&server)
            .await;

        let err = client(&server).fetch_summary("PROJ-42").await.unwrap_err();
        assert!(matches!(err, AppError::Decode(_)));
    }

    #[tokio::test]
    async fn trailing_slash_in_base_url_is_tolerated() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/rest/api/3/issue/PROJ-42"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "fields": { "summary": "Fix login bug" }
            })))
            .mount(&server)
            .await;

        let with_slash = JiraClient::new(
            format!("{}/", server.uri()),
            "dev@example.com".to_string(),
            "token-1".to_string(),
        );
        let summary = with_slash.fetch_summary("PROJ-42").await.unwrap();
        assert_eq!(summary.as_str(), "Fix login bug");
    }
}
