use async_trait::async_trait;
use serde_json::Value;

use crate::domain::{TicketRecord, WorkflowName};
use crate::error::AppResult;

/// Launches a workflow in the external orchestration system.
#[async_trait]
pub trait OrchestratorService: Send + Sync {
    /// Triggers `workflow` with the ticket's launch variables and returns the
    /// orchestrator's response body verbatim.
    async fn launch_workflow(
        &self,
        workflow: &WorkflowName,
        ticket: &TicketRecord,
    ) -> AppResult<Value>;
}
