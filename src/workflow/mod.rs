mod error;
mod workflow;

pub use error::WorkflowError;
pub use workflow::CaseWorkflow;
