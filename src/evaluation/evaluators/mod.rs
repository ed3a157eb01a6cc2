mod holdout_evaluator;
mod performance_evaluator;

pub use holdout_evaluator::HoldoutEvaluator;
pub use performance_evaluator::{PerformanceEvaluator, PerformanceEvaluatorExt};
