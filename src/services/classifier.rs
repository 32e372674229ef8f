use async_trait::async_trait;

use crate::domain::{TicketRecord, WorkflowCatalog};
use crate::error::AppResult;

/// Maps a ticket to one of the catalog's workflow identifiers.
///
/// Implementations return the raw selected text; the pipeline resolves it
/// against the catalog, so an answer outside the catalog fails there rather
/// than reaching the orchestrator.
#[async_trait]
pub trait ClassifierService: Send + Sync {
    async fn classify(
        &self,
        ticket: &TicketRecord,
        catalog: &WorkflowCatalog,
    ) -> AppResult<String>;
}
