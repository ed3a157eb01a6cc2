mod estimators;
mod evaluators;
mod measurement;
mod preview;

pub use estimators::{BasicEstimator, Estimator};
pub use evaluators::{HoldoutEvaluator, PerformanceEvaluator, PerformanceEvaluatorExt};
pub use measurement::{Measurement, format_metric};
pub use preview::{FitSnapshot, HistoryFormat, RefitTrigger, TrainingHistory};
