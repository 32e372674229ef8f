use serde_json::Value;
use tracing::{info, warn};

use crate::context::AppContext;
use crate::domain::{TicketRecord, WorkflowName};
use crate::error::{AppError, AppResult};

#[derive(Debug)]
pub struct OnboardingOutcome {
    pub workflow: WorkflowName,
    pub trigger_response: Value,
    pub report: ReportOutcome,
}

/// Result of one best-effort call against the issue tracker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SideEffect {
    Applied,
    Failed(String),
}

impl SideEffect {
    fn from_result(result: AppResult<()>) -> Self {
        match result {
            Ok(()) => SideEffect::Applied,
            Err(err) => SideEffect::Failed(err.to_string()),
        }
    }

    fn failure(&self) -> Option<&str> {
        match self {
            SideEffect::Applied => None,
            SideEffect::Failed(reason) => Some(reason),
        }
    }
}

#[derive(Debug)]
pub struct ReportOutcome {
    pub comment: SideEffect,
    pub transition: SideEffect,
}

/// Runs the full onboarding pipeline for one webhook payload: adapt the
/// payload, classify it, launch the selected workflow, then report back to
/// the ticket. Classification and launch failures abort the pipeline;
/// reporting failures abort only under the strict reporting policy.
pub async fn run_onboarding(ctx: &AppContext, payload: &Value) -> AppResult<OnboardingOutcome> {
    let ticket = TicketRecord::from_payload(payload)?;
    info!("processing onboarding ticket {}", ticket.key);

    let answer = ctx.classifier.classify(&ticket, &ctx.config.catalog).await?;
    let workflow = ctx.config.catalog.resolve(&answer)?;
    info!(
        "ticket {} classified as workflow {}",
        ticket.key,
        workflow.as_str()
    );

    let trigger_response = ctx.orchestrator.launch_workflow(&workflow, &ticket).await?;
    info!("workflow {} launched", workflow.as_str());

    let report = report_to_ticket(ctx, &ticket.key, &workflow).await;
    if ctx.config.strict_reporting {
        if let Some(reason) = report.comment.failure().or(report.transition.failure()) {
            return Err(AppError::IssueTracker(reason.to_string()));
        }
    }

    Ok(OnboardingOutcome {
        workflow,
        trigger_response,
        report,
    })
}

async fn report_to_ticket(
    ctx: &AppContext,
    ticket_key: &str,
    workflow: &WorkflowName,
) -> ReportOutcome {
    let body = format!(
        "The workflow `{}` was selected for this ticket and has been triggered \
         in the orchestrator.",
        workflow.as_str()
    );

    let comment = SideEffect::from_result(ctx.issue_tracker.add_comment(ticket_key, &body).await);
    if let Some(reason) = comment.failure() {
        warn!("failed to comment on ticket {ticket_key}: {reason}");
    }

    let transition =
        SideEffect::from_result(ctx.issue_tracker.transition_to_done(ticket_key).await);
    if let Some(reason) = transition.failure() {
        warn!("failed to transition ticket {ticket_key}: {reason}");
    }

    ReportOutcome {
        comment,
        transition,
    }
}
