use crate::evaluation::Measurement;
use std::collections::HashMap;

/// Accumulates predictions against ground truth and reports metrics.
pub trait PerformanceEvaluator {
    /// Feeds one example: its true class index and the per-class votes the
    /// model produced for it. Unusable votes may be skipped.
    fn add_result(&mut self, true_class: usize, class_votes: &[f64]);

    /// Snapshot of current metrics.
    fn performance(&self) -> Vec<Measurement>;
}

pub trait PerformanceEvaluatorExt {
    /// Returns (name, Some(value)|None) for each requested metric, preserving order.
    fn metrics<'a, I>(&self, names: I) -> Vec<(String, Option<f64>)>
    where
        I: IntoIterator<Item = &'a str>;

    fn metric(&self, name: &str) -> Option<f64> {
        self.metrics([name]).into_iter().next().and_then(|(_, v)| v)
    }
}

impl<T: PerformanceEvaluator + ?Sized> PerformanceEvaluatorExt for T {
    fn metrics<'a, I>(&self, names: I) -> Vec<(String, Option<f64>)>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let map: HashMap<_, _> = self
            .performance()
            .into_iter()
            .map(|m| (m.name, m.value))
            .collect();
        names
            .into_iter()
            .map(|n| (n.to_string(), map.get(n).copied()))
            .collect()
    }
}
