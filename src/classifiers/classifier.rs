use crate::text::SparseVector;

/// Batch classifier over sparse feature vectors.
///
/// Labels are class indices in `0..num_classes`, where the class count and
/// feature dimension are fixed by [`set_model_context`] before training.
///
/// [`set_model_context`]: Classifier::set_model_context
pub trait Classifier {
    /// One score per class, or `None` when the model has no context yet.
    /// Probabilistic classifiers return a distribution summing to one.
    fn get_votes_for_instance(&self, features: &SparseVector) -> Option<Vec<f64>>;

    /// Resets the model to an untrained state for the given shape.
    fn set_model_context(&mut self, num_features: usize, num_classes: usize);

    /// Fits on the whole batch. `features` and `labels` have equal length.
    fn train_on_batch(&mut self, features: &[SparseVector], labels: &[usize]);
}
