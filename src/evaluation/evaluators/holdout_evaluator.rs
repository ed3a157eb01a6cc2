use crate::evaluation::{Estimator, Measurement, PerformanceEvaluator};
use crate::utils::math::argmax;

/// Evaluator for a held-out test partition.
///
/// Reports `accuracy` (NaN when nothing was evaluated) and Cohen's `kappa`
/// computed from the marginals of predicted and true classes.
pub struct HoldoutEvaluator<E: Estimator + Default> {
    weight_correct: E,
    predicted: Vec<E>,
    actual: Vec<E>,
    num_classes: usize,
}

impl<E: Estimator + Default> HoldoutEvaluator<E> {
    pub fn new(num_classes: usize) -> Self {
        let make_vec = || (0..num_classes).map(|_| E::default()).collect::<Vec<_>>();
        Self {
            weight_correct: E::default(),
            predicted: make_vec(),
            actual: make_vec(),
            num_classes,
        }
    }

    pub fn evaluated(&self) -> u64 {
        self.weight_correct.observations()
    }

    fn kappa(&self) -> f64 {
        let p_o = self.weight_correct.estimation();
        let p_e: f64 = self
            .predicted
            .iter()
            .zip(&self.actual)
            .map(|(p, a)| (p.estimation(), a.estimation()))
            .filter(|(p, a)| p.is_finite() && a.is_finite())
            .map(|(p, a)| p * a)
            .sum();
        let denom = 1.0 - p_e;
        if denom.abs() > f64::EPSILON {
            (p_o - p_e) / denom
        } else {
            f64::NAN
        }
    }
}

impl<E: Estimator + Default> PerformanceEvaluator for HoldoutEvaluator<E> {
    fn add_result(&mut self, true_class: usize, class_votes: &[f64]) {
        if true_class >= self.num_classes {
            return;
        }
        let Some(predicted) = argmax(class_votes) else {
            return;
        };

        self.weight_correct
            .add(if predicted == true_class { 1.0 } else { 0.0 });
        for (c, est) in self.predicted.iter_mut().enumerate() {
            est.add(if c == predicted { 1.0 } else { 0.0 });
        }
        for (c, est) in self.actual.iter_mut().enumerate() {
            est.add(if c == true_class { 1.0 } else { 0.0 });
        }
    }

    fn performance(&self) -> Vec<Measurement> {
        let kappa = if self.evaluated() == 0 {
            f64::NAN
        } else {
            self.kappa()
        };
        vec![
            Measurement::new("accuracy", self.weight_correct.estimation()),
            Measurement::new("kappa", kappa),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::{BasicEstimator, PerformanceEvaluatorExt};

    type Eval = HoldoutEvaluator<BasicEstimator>;

    fn votes(pred: usize) -> Vec<f64> {
        let mut v = vec![0.1; 3];
        v[pred] = 0.8;
        v
    }

    #[test]
    fn empty_reports_nan() {
        let ev = Eval::new(3);
        assert!(ev.metric("accuracy").unwrap().is_nan());
        assert!(ev.metric("kappa").unwrap().is_nan());
    }

    #[test]
    fn reports_only_accuracy_and_kappa() {
        let mut ev = Eval::new(3);
        ev.add_result(0, &votes(0));
        let names: Vec<String> = ev.performance().into_iter().map(|m| m.name).collect();
        assert_eq!(names, vec!["accuracy", "kappa"]);
    }

    #[test]
    fn accuracy_is_fraction_correct() {
        let mut ev = Eval::new(3);
        ev.add_result(0, &votes(0));
        ev.add_result(1, &votes(1));
        ev.add_result(2, &votes(0));
        ev.add_result(2, &votes(2));
        assert!((ev.metric("accuracy").unwrap() - 0.75).abs() < 1e-12);
        assert_eq!(ev.evaluated(), 4);
    }

    #[test]
    fn kappa_one_when_perfect_on_balanced() {
        let mut ev = Eval::new(3);
        for c in 0..3 {
            ev.add_result(c, &votes(c));
        }
        assert!((ev.metric("kappa").unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn kappa_zero_when_accuracy_equals_chance() {
        let mut ev = Eval::new(3);
        ev.add_result(0, &votes(1));
        ev.add_result(1, &votes(1));
        assert!(ev.metric("kappa").unwrap().abs() < 1e-12);
    }

    #[test]
    fn unusable_votes_and_out_of_range_labels_are_skipped() {
        let mut ev = Eval::new(3);
        ev.add_result(0, &[]);
        ev.add_result(7, &votes(0));
        assert_eq!(ev.evaluated(), 0);
    }
}
