pub mod classifier;
pub mod issue_tracker;
pub mod orchestrator;

pub use classifier::ClassifierService;
pub use issue_tracker::IssueTrackerService;
pub use orchestrator::OrchestratorService;
