use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("invalid webhook payload: {0}")]
    Payload(String),
    #[error("classification error: {0}")]
    Classification(String),
    #[error("classifier selected unknown workflow: {0}")]
    UnknownWorkflow(String),
    #[error("orchestration error: {0}")]
    Orchestration(String),
    #[error("issue tracker error: {0}")]
    IssueTracker(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
