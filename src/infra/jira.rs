use async_trait::async_trait;
use base64::prelude::{BASE64_STANDARD, Engine as _};
use reqwest::{
    Client, RequestBuilder,
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::services::IssueTrackerService;

pub struct JiraClient {
    http: Client,
    base_url: String,
    email: String,
    token: String,
    done_transition_id: String,
}

impl JiraClient {
    pub fn new(
        http: Client,
        base_url: String,
        email: String,
        token: String,
        done_transition_id: String,
    ) -> Self {
        Self {
            http,
            base_url,
            email,
            token,
            done_transition_id,
        }
    }

    fn auth_header(&self) -> String {
        let credentials = format!("{}:{}", self.email, self.token);
        let encoded = BASE64_STANDARD.encode(credentials);
        format!("Basic {encoded}")
    }

    fn issue_endpoint(&self, ticket_key: &str, suffix: &str) -> String {
        format!(
            "{}/rest/api/3/issue/{}/{}",
            self.base_url.trim_end_matches('/'),
            ticket_key,
            suffix
        )
    }

    fn post_json(&self, url: String, body: &impl Serialize) -> RequestBuilder {
        self.http
            .post(url)
            .header(AUTHORIZATION, self.auth_header())
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .json(body)
    }

    async fn execute(&self, what: &str, request: RequestBuilder) -> AppResult<()> {
        let response = request
            .send()
            .await
            .map_err(|err| AppError::IssueTracker(format!("failed to {what}: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unable to read response>".to_string());
            return Err(AppError::IssueTracker(format!(
                "Jira responded to {what} with {status}: {body}"
            )));
        }

        Ok(())
    }
}

#[async_trait]
impl IssueTrackerService for JiraClient {
    async fn add_comment(&self, ticket_key: &str, body: &str) -> AppResult<()> {
        let url = self.issue_endpoint(ticket_key, "comment");
        let payload = CommentRequest { body };
        self.execute("add comment", self.post_json(url, &payload))
            .await
    }

    async fn transition_to_done(&self, ticket_key: &str) -> AppResult<()> {
        let url = self.issue_endpoint(ticket_key, "transitions");
        let payload = TransitionRequest {
            transition: Transition {
                id: &self.done_transition_id,
            },
        };
        self.execute("transition ticket", self.post_json(url, &payload))
            .await
    }
}

#[derive(Serialize)]
struct CommentRequest<'a> {
    body: &'a str,
}

#[derive(Serialize)]
struct TransitionRequest<'a> {
    transition: Transition<'a>,
}

#[derive(Serialize)]
struct Transition<'a> {
    id: &'a str,
}
