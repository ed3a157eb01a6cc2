mod error;
mod pipeline;

pub use error::BuildError;

use crate::pipeline::ClassifierPipeline;
use crate::ui::types::choices::ClassifierChoice;

pub fn build_pipeline(choice: ClassifierChoice) -> Result<ClassifierPipeline, BuildError> {
    match choice {
        ClassifierChoice::LogisticRegression(params) => ClassifierPipeline::try_from(params),
    }
}
