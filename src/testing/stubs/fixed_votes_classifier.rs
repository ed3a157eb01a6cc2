use crate::classifiers::Classifier;
use crate::text::SparseVector;
use std::cell::Cell;
use std::rc::Rc;

/// Classifier that ignores its input and always returns the same votes.
///
/// The number of examples it was trained on since its last
/// `set_model_context` is written to an optional shared counter, so a test
/// can read it after the classifier has been boxed away.
pub struct FixedVotesClassifier {
    votes: Option<Vec<f64>>,
    trained_on: Option<Rc<Cell<usize>>>,
}

impl FixedVotesClassifier {
    pub fn new(votes: Option<Vec<f64>>) -> Self {
        Self {
            votes,
            trained_on: None,
        }
    }

    pub fn counting_into(mut self, counter: Rc<Cell<usize>>) -> Self {
        self.trained_on = Some(counter);
        self
    }
}

impl Classifier for FixedVotesClassifier {
    fn get_votes_for_instance(&self, _features: &SparseVector) -> Option<Vec<f64>> {
        self.votes.clone()
    }

    fn set_model_context(&mut self, _num_features: usize, _num_classes: usize) {
        if let Some(c) = &self.trained_on {
            c.set(0);
        }
    }

    fn train_on_batch(&mut self, features: &[SparseVector], _labels: &[usize]) {
        if let Some(c) = &self.trained_on {
            c.set(c.get() + features.len());
        }
    }
}
