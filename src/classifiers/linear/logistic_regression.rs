use crate::classifiers::Classifier;
use crate::text::SparseVector;
use crate::utils::math::softmax;
use std::io::{Error, ErrorKind};

/// Multinomial (softmax) logistic regression.
///
/// Trained by full-batch gradient descent on the mean cross-entropy plus an
/// L2 penalty on the weights (the bias is not penalised). Weights start at
/// zero, so training is deterministic. Training stops after
/// `max_iterations` steps or once every gradient component is below
/// `tolerance` in absolute value.
#[derive(Debug, Clone)]
pub struct LogisticRegression {
    learning_rate: f64,
    max_iterations: u64,
    l2_penalty: f64,
    tolerance: f64,

    weights: Vec<Vec<f64>>,
    bias: Vec<f64>,
    num_features: usize,
    iterations_run: u64,
}

impl LogisticRegression {
    pub fn new(
        learning_rate: f64,
        max_iterations: u64,
        l2_penalty: f64,
        tolerance: f64,
    ) -> Result<Self, Error> {
        if !(learning_rate.is_finite() && learning_rate > 0.0) {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "learning_rate must be > 0",
            ));
        }
        if !(l2_penalty.is_finite() && l2_penalty >= 0.0) {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "l2_penalty must be >= 0",
            ));
        }
        if !(tolerance.is_finite() && tolerance >= 0.0) {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "tolerance must be >= 0",
            ));
        }
        Ok(Self {
            learning_rate,
            max_iterations,
            l2_penalty,
            tolerance,
            weights: Vec::new(),
            bias: Vec::new(),
            num_features: 0,
            iterations_run: 0,
        })
    }

    pub fn iterations_run(&self) -> u64 {
        self.iterations_run
    }

    pub fn num_classes(&self) -> usize {
        self.bias.len()
    }

    #[inline]
    fn scores(&self, x: &SparseVector) -> Vec<f64> {
        self.weights
            .iter()
            .zip(&self.bias)
            .map(|(w, b)| b + x.dot(w))
            .collect()
    }
}

impl Default for LogisticRegression {
    fn default() -> Self {
        Self {
            learning_rate: 1.0,
            max_iterations: 500,
            l2_penalty: 0.01,
            tolerance: 1e-6,
            weights: Vec::new(),
            bias: Vec::new(),
            num_features: 0,
            iterations_run: 0,
        }
    }
}

impl Classifier for LogisticRegression {
    fn get_votes_for_instance(&self, features: &SparseVector) -> Option<Vec<f64>> {
        if self.bias.is_empty() {
            return None;
        }
        Some(softmax(&self.scores(features)))
    }

    fn set_model_context(&mut self, num_features: usize, num_classes: usize) {
        self.num_features = num_features;
        self.weights = vec![vec![0.0; num_features]; num_classes];
        self.bias = vec![0.0; num_classes];
        self.iterations_run = 0;
    }

    fn train_on_batch(&mut self, features: &[SparseVector], labels: &[usize]) {
        let k = self.bias.len();
        let n = features.len().min(labels.len());
        if k == 0 || n == 0 {
            return;
        }
        let inv_n = 1.0 / n as f64;

        for iteration in 0..self.max_iterations {
            let mut grad_w = vec![vec![0.0; self.num_features]; k];
            let mut grad_b = vec![0.0; k];

            for (x, &y) in features.iter().zip(labels).take(n) {
                let p = softmax(&self.scores(x));
                for c in 0..k {
                    let err = p.get(c).copied().unwrap_or(0.0) - if c == y { 1.0 } else { 0.0 };
                    grad_b[c] += err * inv_n;
                    for (j, v) in x.iter() {
                        if let Some(g) = grad_w[c].get_mut(j) {
                            *g += err * v * inv_n;
                        }
                    }
                }
            }

            let mut max_grad = 0.0f64;
            for c in 0..k {
                for (g, w) in grad_w[c].iter_mut().zip(&self.weights[c]) {
                    *g += self.l2_penalty * w;
                    max_grad = max_grad.max(g.abs());
                }
                max_grad = max_grad.max(grad_b[c].abs());
            }

            self.iterations_run = iteration + 1;
            if max_grad < self.tolerance {
                tracing::debug!(iterations = self.iterations_run, "logistic regression converged");
                return;
            }

            for c in 0..k {
                for (w, g) in self.weights[c].iter_mut().zip(&grad_w[c]) {
                    *w -= self.learning_rate * g;
                }
                self.bias[c] -= self.learning_rate * grad_b[c];
            }
        }
        tracing::debug!(
            iterations = self.iterations_run,
            "logistic regression stopped at max_iterations"
        );
    }
}
