use async_trait::async_trait;

use crate::error::AppResult;

/// Side effects against the issue tracker hosting the ticket.
#[async_trait]
pub trait IssueTrackerService: Send + Sync {
    async fn add_comment(&self, ticket_key: &str, body: &str) -> AppResult<()>;

    /// Moves the ticket to the configured done state.
    async fn transition_to_done(&self, ticket_key: &str) -> AppResult<()>;
}
