pub mod classifier;
pub mod linear;

pub use classifier::Classifier;
pub use linear::LogisticRegression;
