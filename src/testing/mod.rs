pub mod stubs;

pub use stubs::{Answer, FixedVotesClassifier, ScriptedDriver};
