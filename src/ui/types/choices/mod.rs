mod action_choice;
mod classifier_choice;
mod schema;
mod ui_choice;

pub use action_choice::ActionChoice;
pub use classifier_choice::{ClassifierChoice, ClassifierKind, PipelineParams};
pub use schema::*;
pub use ui_choice::UIChoice;
