use crate::classifiers::{Classifier, LogisticRegression};
use crate::pipeline::ClassifierPipeline;
use crate::ui::types::{build::BuildError, choices::PipelineParams};
use std::convert::TryFrom;

impl TryFrom<PipelineParams> for LogisticRegression {
    type Error = BuildError;

    fn try_from(params: PipelineParams) -> Result<Self, Self::Error> {
        LogisticRegression::new(
            params.learning_rate,
            params.max_iterations,
            params.l2_penalty,
            params.tolerance,
        )
        .map_err(BuildError::from)
    }
}

impl TryFrom<PipelineParams> for ClassifierPipeline {
    type Error = BuildError;

    fn try_from(params: PipelineParams) -> Result<Self, Self::Error> {
        if !params.test_fraction.is_finite() || !(0.0..1.0).contains(&params.test_fraction) {
            return Err(BuildError::InvalidParameter(
                "test_fraction must be in [0, 1)".into(),
            ));
        }
        // Every fit starts from an untrained copy of this prototype.
        let prototype = LogisticRegression::try_from(params.clone())?;
        ClassifierPipeline::new(params.test_fraction, params.seed, move || {
            Box::new(prototype.clone()) as Box<dyn Classifier>
        })
        .map_err(BuildError::from)
    }
}
