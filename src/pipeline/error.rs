use crate::cases::RiskTier;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PipelineError {
    #[error("training data has no '{0}' cases; every risk tier needs at least one labelled case")]
    MissingRiskTier(RiskTier),

    #[error("class not found: {0}")]
    ClassNotFound(RiskTier),

    #[error("model has not been trained")]
    NotTrained,
}
