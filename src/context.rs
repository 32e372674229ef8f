use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::{ClassifierService, IssueTrackerService, OrchestratorService};

#[derive(Clone)]
pub struct AppContext {
    pub config: AppConfig,
    pub classifier: Arc<dyn ClassifierService>,
    pub orchestrator: Arc<dyn OrchestratorService>,
    pub issue_tracker: Arc<dyn IssueTrackerService>,
}

impl AppContext {
    pub fn new(
        config: AppConfig,
        classifier: Arc<dyn ClassifierService>,
        orchestrator: Arc<dyn OrchestratorService>,
        issue_tracker: Arc<dyn IssueTrackerService>,
    ) -> Self {
        Self {
            config,
            classifier,
            orchestrator,
            issue_tracker,
        }
    }
}
