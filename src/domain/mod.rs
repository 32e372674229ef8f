pub mod ticket;
pub mod workflow;

pub use ticket::TicketRecord;
pub use workflow::{WorkflowCatalog, WorkflowName};
