use std::fmt::Write as _;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};

use crate::domain::{TicketRecord, WorkflowCatalog};
use crate::error::{AppError, AppResult};
use crate::services::ClassifierService;

/// Chat-completion backed classifier.
pub struct OpenAiClient {
    http: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAiClient {
    pub fn new(http: Client, api_key: String, base_url: String, model: String) -> Self {
        Self {
            http,
            api_key,
            base_url,
            model,
        }
    }

    fn completions_endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

/// Renders the single-turn classification prompt: the catalog's identifiers
/// verbatim, then the ticket fields as labeled lines.
fn render_prompt(ticket: &TicketRecord, catalog: &WorkflowCatalog) -> String {
    let mut prompt = String::from(
        "You are a decision engine. Based on the following onboarding ticket fields, \
         choose the best matching workflow from this list:\n",
    );
    for id in catalog.identifiers() {
        let _ = writeln!(prompt, "- {id}");
    }
    let _ = write!(
        prompt,
        "\nTicket Data:\n\
         Department: {}\n\
         Location: {}\n\
         Role: {}\n\
         Team: {}\n\
         \nRespond with ONLY the workflow name.",
        ticket.department, ticket.location, ticket.job_title, ticket.team
    );
    prompt
}

#[async_trait]
impl ClassifierService for OpenAiClient {
    async fn classify(
        &self,
        ticket: &TicketRecord,
        catalog: &WorkflowCatalog,
    ) -> AppResult<String> {
        let request_body = ChatCompletionRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: render_prompt(ticket, catalog),
            }],
        };

        let response = self
            .http
            .post(self.completions_endpoint())
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(CONTENT_TYPE, "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|err| {
                AppError::Classification(format!("failed to call completion provider: {err}"))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unable to read response>".to_string());
            return Err(AppError::Classification(format!(
                "completion provider responded with {status}: {body}"
            )));
        }

        let payload: ChatCompletionResponse = response.json().await.map_err(|err| {
            AppError::Classification(format!("failed to parse completion response: {err}"))
        })?;

        let answer = payload
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                AppError::Classification("completion response contained no choices".to_string())
            })?;

        Ok(answer.trim().to_string())
    }
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: String,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}
