pub mod jira;
pub mod openai;
pub mod uac;

pub use jira::JiraClient;
pub use openai::OpenAiClient;
pub use uac::UacClient;
