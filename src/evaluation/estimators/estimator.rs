/// Incremental scalar estimator.
///
/// Values arrive one at a time through [`add`](Estimator::add); NaN marks
/// "not applicable" and is skipped by implementations.
pub trait Estimator {
    fn add(&mut self, v: f64);

    /// Current estimate, NaN before any observation.
    fn estimation(&self) -> f64;

    /// Number of observations counted so far.
    fn observations(&self) -> u64;
}
