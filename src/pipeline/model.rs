use crate::cases::RiskTier;
use crate::classifiers::Classifier;
use crate::pipeline::PipelineError;
use crate::text::TfidfVectorizer;
use crate::utils::math::argmax;
use std::fmt::{Display, Formatter};

/// Result of assessing one description.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskAssessment {
    pub label: RiskTier,
    pub high: f64,
    pub medium: f64,
    pub low: f64,
}

impl RiskAssessment {
    pub fn probability(&self, tier: RiskTier) -> f64 {
        match tier {
            RiskTier::High => self.high,
            RiskTier::Medium => self.medium,
            RiskTier::Low => self.low,
        }
    }
}

impl Display for RiskAssessment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "AI Assessment: {}", self.label)?;
        writeln!(f, "Probability of High Risk: {:.2}", self.high)?;
        writeln!(f, "Probability of Medium Risk: {:.2}", self.medium)?;
        write!(f, "Probability of Low Risk: {:.2}", self.low)
    }
}

/// Fitted vectorizer + classifier pair. Holds no reference to the case store.
pub struct RiskModel {
    vectorizer: TfidfVectorizer,
    classifier: Box<dyn Classifier>,
    classes: Vec<RiskTier>,
}

impl RiskModel {
    /// `classes[i]` is the tier the classifier's `i`-th vote stands for.
    pub fn new(
        vectorizer: TfidfVectorizer,
        classifier: Box<dyn Classifier>,
        classes: Vec<RiskTier>,
    ) -> Self {
        Self {
            vectorizer,
            classifier,
            classes,
        }
    }

    pub fn classes(&self) -> &[RiskTier] {
        &self.classes
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vectorizer.vocabulary_size()
    }

    /// Raw per-class votes for `text`, in [`classes`](Self::classes) order.
    pub fn votes(&self, text: &str) -> Result<Vec<f64>, PipelineError> {
        let x = self.vectorizer.transform(text);
        self.classifier
            .get_votes_for_instance(&x)
            .ok_or(PipelineError::NotTrained)
    }

    fn probability_of(&self, votes: &[f64], tier: RiskTier) -> Result<f64, PipelineError> {
        self.classes
            .iter()
            .position(|&c| c == tier)
            .and_then(|i| votes.get(i).copied())
            .ok_or(PipelineError::ClassNotFound(tier))
    }

    /// Most likely tier plus the probability of each of the three tiers.
    pub fn infer(&self, text: &str) -> Result<RiskAssessment, PipelineError> {
        let votes = self.votes(text)?;
        let label = argmax(&votes)
            .and_then(|i| self.classes.get(i).copied())
            .ok_or(PipelineError::NotTrained)?;

        Ok(RiskAssessment {
            label,
            high: self.probability_of(&votes, RiskTier::High)?,
            medium: self.probability_of(&votes, RiskTier::Medium)?,
            low: self.probability_of(&votes, RiskTier::Low)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FixedVotesClassifier;

    fn model(votes: Option<Vec<f64>>, classes: Vec<RiskTier>) -> RiskModel {
        let mut v = TfidfVectorizer::new();
        v.fit(&["consent"]);
        RiskModel::new(v, Box::new(FixedVotesClassifier::new(votes)), classes)
    }

    #[test]
    fn infer_maps_votes_to_tiers() {
        let m = model(
            Some(vec![0.2, 0.7, 0.1]),
            vec![RiskTier::High, RiskTier::Medium, RiskTier::Low],
        );
        let a = m.infer("consent").unwrap();
        assert_eq!(a.label, RiskTier::Medium);
        assert_eq!(a.high, 0.2);
        assert_eq!(a.medium, 0.7);
        assert_eq!(a.low, 0.1);
        assert_eq!(a.probability(RiskTier::Low), 0.1);
    }

    #[test]
    fn class_order_follows_model_classes() {
        let m = model(
            Some(vec![0.6, 0.3, 0.1]),
            vec![RiskTier::Low, RiskTier::High, RiskTier::Medium],
        );
        let a = m.infer("anything").unwrap();
        assert_eq!(a.label, RiskTier::Low);
        assert_eq!(a.low, 0.6);
        assert_eq!(a.high, 0.3);
    }

    #[test]
    fn missing_tier_is_class_not_found() {
        let m = model(Some(vec![0.4, 0.6]), vec![RiskTier::High, RiskTier::Medium]);
        assert_eq!(
            m.infer("consent").unwrap_err(),
            PipelineError::ClassNotFound(RiskTier::Low)
        );
    }

    #[test]
    fn untrained_classifier() {
        let m = model(None, vec![RiskTier::High, RiskTier::Medium, RiskTier::Low]);
        assert_eq!(m.infer("consent").unwrap_err(), PipelineError::NotTrained);
    }

    #[test]
    fn display_two_decimals() {
        let a = RiskAssessment {
            label: RiskTier::High,
            high: 0.756,
            medium: 0.2,
            low: 0.044,
        };
        let s = a.to_string();
        assert!(s.starts_with("AI Assessment: High Risk\n"));
        assert!(s.contains("Probability of High Risk: 0.76"));
        assert!(s.ends_with("Probability of Low Risk: 0.04"));
    }
}
