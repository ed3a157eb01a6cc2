use crate::cases::CaseId;
use crate::pipeline::PipelineError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WorkflowError {
    #[error("case {0} not found")]
    CaseNotFound(CaseId),

    #[error("no risk model is available; fix the training data and retrain")]
    NoModel,

    #[error(transparent)]
    Pipeline(#[from] PipelineError),
}
