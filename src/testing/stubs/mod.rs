pub mod fixed_votes_classifier;
pub mod scripted_driver;

pub use fixed_votes_classifier::FixedVotesClassifier;
pub use scripted_driver::{Answer, ScriptedDriver};
