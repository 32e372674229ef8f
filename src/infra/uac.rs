use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::{TicketRecord, WorkflowName};
use crate::error::{AppError, AppResult};
use crate::services::OrchestratorService;

/// Client for the workflow orchestration API (Stonebranch UAC style): one
/// bearer-authenticated POST per launch, no retries.
pub struct UacClient {
    http: Client,
    launch_url: String,
    api_token: String,
}

impl UacClient {
    pub fn new(http: Client, launch_url: String, api_token: String) -> Self {
        Self {
            http,
            launch_url,
            api_token,
        }
    }
}

#[async_trait]
impl OrchestratorService for UacClient {
    async fn launch_workflow(
        &self,
        workflow: &WorkflowName,
        ticket: &TicketRecord,
    ) -> AppResult<Value> {
        let request_body = LaunchRequest {
            workflow_name: workflow.as_str(),
            variables: ticket.launch_variables(),
        };

        let response = self
            .http
            .post(&self.launch_url)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_token))
            .header(CONTENT_TYPE, "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|err| AppError::Orchestration(format!("failed to call UAC: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unable to read response>".to_string());
            return Err(AppError::Orchestration(format!(
                "UAC responded with {status}: {body}"
            )));
        }

        response
            .json::<Value>()
            .await
            .map_err(|err| AppError::Orchestration(format!("failed to parse UAC response: {err}")))
    }
}

#[derive(Serialize)]
struct LaunchRequest<'a> {
    workflow_name: &'a str,
    variables: Map<String, Value>,
}
