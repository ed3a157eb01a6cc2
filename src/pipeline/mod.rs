mod error;
mod model;
mod pipeline;
mod split;

pub use error::PipelineError;
pub use model::{RiskAssessment, RiskModel};
pub use pipeline::{ClassifierPipeline, DEFAULT_SEED, DEFAULT_TEST_FRACTION, FitReport, LearnerFactory};
pub use split::train_test_split;
