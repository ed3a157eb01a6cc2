pub mod cases;
pub mod classifiers;
pub mod evaluation;
pub mod pipeline;
pub mod text;
pub mod ui;
pub mod utils;
pub mod workflow;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;
