use crate::pipeline::{DEFAULT_SEED, DEFAULT_TEST_FRACTION};
use crate::ui::types::choices::UIChoice;
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumMessage, EnumString, IntoStaticStr};

/// Tunables of the risk pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct PipelineParams {
    #[schemars(
        title = "Test Fraction",
        description = "Share of labelled cases held out to measure accuracy",
        range(min = 0.0, max = 0.9)
    )]
    pub test_fraction: f64,

    #[schemars(title = "Seed", description = "Seed of the train/test shuffle")]
    pub seed: u64,

    #[schemars(
        title = "Learning Rate",
        description = "Gradient descent step size",
        range(min = 0.001, max = 10.0)
    )]
    pub learning_rate: f64,

    #[schemars(
        title = "Max Iterations",
        description = "Upper bound on gradient descent steps",
        range(min = 1)
    )]
    pub max_iterations: u64,

    #[schemars(
        title = "L2 Penalty",
        description = "Weight decay applied to the feature weights",
        range(min = 0.0)
    )]
    pub l2_penalty: f64,

    #[schemars(
        title = "Tolerance",
        description = "Stop once every gradient component is below this",
        range(min = 0.0)
    )]
    pub tolerance: f64,
}

impl Default for PipelineParams {
    fn default() -> Self {
        Self {
            test_fraction: DEFAULT_TEST_FRACTION,
            seed: DEFAULT_SEED,
            learning_rate: 1.0,
            max_iterations: 500,
            l2_penalty: 0.01,
            tolerance: 1e-6,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, EnumDiscriminants)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(ClassifierKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum ClassifierChoice {
    #[strum_discriminants(strum(
        message = "Logistic Regression",
        detailed_message = "TF-IDF features into a multinomial logistic regression."
    ))]
    LogisticRegression(PipelineParams),
}

impl UIChoice for ClassifierChoice {
    type Kind = ClassifierKind;

    fn schema() -> Schema {
        schema_for!(ClassifierChoice)
    }

    fn prompt_label() -> &'static str {
        "Choose a classifier:"
    }

    fn default_params(kind: Self::Kind) -> Value {
        match kind {
            ClassifierKind::LogisticRegression => {
                serde_json::to_value(PipelineParams::default()).unwrap_or_default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_parts_fills_missing_fields_with_defaults() {
        let params = serde_json::json!({ "seed": 7 });
        let choice = ClassifierChoice::from_parts(ClassifierKind::LogisticRegression, params).unwrap();
        let ClassifierChoice::LogisticRegression(p) = choice;
        assert_eq!(p.seed, 7);
        assert_eq!(p.test_fraction, DEFAULT_TEST_FRACTION);
        assert_eq!(p.max_iterations, 500);
    }

    #[test]
    fn kind_is_kebab_case() {
        let key: &'static str = ClassifierKind::LogisticRegression.into();
        assert_eq!(key, "logistic-regression");
    }
}
