use crate::cases::{RiskTier, TrainingPair};
use crate::classifiers::{Classifier, LogisticRegression};
use crate::evaluation::{
    BasicEstimator, HoldoutEvaluator, Measurement, PerformanceEvaluator, PerformanceEvaluatorExt,
};
use crate::pipeline::{PipelineError, RiskModel, train_test_split};
use crate::text::{SparseVector, TfidfVectorizer};
use std::io::{Error, ErrorKind};
use strum::IntoEnumIterator;

pub const DEFAULT_TEST_FRACTION: f64 = 0.2;
pub const DEFAULT_SEED: u64 = 42;

/// Builds a fresh, untrained classifier for every fit.
pub type LearnerFactory = Box<dyn Fn() -> Box<dyn Classifier>>;

/// Sizes and hold-out metrics of one fit.
#[derive(Debug, Clone, PartialEq)]
pub struct FitReport {
    pub training_size: usize,
    pub test_size: usize,
    pub measurements: Vec<Measurement>,
}

impl FitReport {
    fn metric(&self, name: &str) -> f64 {
        self.measurements
            .iter()
            .find(|m| m.name == name)
            .map_or(f64::NAN, |m| m.value)
    }

    /// Held-out accuracy; NaN when the test partition was empty.
    pub fn accuracy(&self) -> f64 {
        self.metric("accuracy")
    }

    pub fn kappa(&self) -> f64 {
        self.metric("kappa")
    }
}

/// Split, vectorize, fit and evaluate.
pub struct ClassifierPipeline {
    test_fraction: f64,
    seed: u64,
    make_learner: LearnerFactory,
}

impl ClassifierPipeline {
    pub fn new<F>(test_fraction: f64, seed: u64, make_learner: F) -> Result<Self, Error>
    where
        F: Fn() -> Box<dyn Classifier> + 'static,
    {
        if !(0.0..1.0).contains(&test_fraction) {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "test_fraction must be in [0, 1)",
            ));
        }
        Ok(Self {
            test_fraction,
            seed,
            make_learner: Box::new(make_learner),
        })
    }

    pub fn test_fraction(&self) -> f64 {
        self.test_fraction
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fits a fresh model on `pairs`.
    ///
    /// Fails with [`PipelineError::MissingRiskTier`] unless every tier has at
    /// least one pair; the split then guarantees each tier also reaches the
    /// training partition.
    pub fn fit(&self, pairs: &[TrainingPair]) -> Result<(RiskModel, FitReport), PipelineError> {
        if let Some(missing) = RiskTier::iter().find(|t| !pairs.iter().any(|p| p.tier == *t)) {
            return Err(PipelineError::MissingRiskTier(missing));
        }

        let (train, test) =
            train_test_split(pairs, self.test_fraction, self.seed, |p| p.tier.index());

        let documents: Vec<&str> = train.iter().map(|p| p.description.as_str()).collect();
        let labels: Vec<usize> = train.iter().map(|p| p.tier.index()).collect();

        let mut vectorizer = TfidfVectorizer::new();
        let features: Vec<SparseVector> = vectorizer.fit_transform(&documents);

        let mut learner = (self.make_learner)();
        learner.set_model_context(vectorizer.vocabulary_size(), RiskTier::COUNT);
        learner.train_on_batch(&features, &labels);

        let classes: Vec<RiskTier> = RiskTier::iter().collect();
        let model = RiskModel::new(vectorizer, learner, classes);

        let mut evaluator = HoldoutEvaluator::<BasicEstimator>::new(RiskTier::COUNT);
        for pair in &test {
            let votes = model.votes(&pair.description)?;
            evaluator.add_result(pair.tier.index(), &votes);
        }

        let report = FitReport {
            training_size: train.len(),
            test_size: test.len(),
            measurements: evaluator.performance(),
        };
        tracing::info!(
            train = report.training_size,
            test = report.test_size,
            vocabulary = model.vocabulary_size(),
            accuracy = evaluator.metric("accuracy").unwrap_or(f64::NAN),
            "risk model fitted"
        );
        Ok((model, report))
    }
}

impl Default for ClassifierPipeline {
    fn default() -> Self {
        Self {
            test_fraction: DEFAULT_TEST_FRACTION,
            seed: DEFAULT_SEED,
            make_learner: Box::new(|| Box::new(LogisticRegression::default()) as Box<dyn Classifier>),
        }
    }
}
