use strum_macros::{Display, EnumIter, EnumMessage, IntoStaticStr};

/// Entries of the session's main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, Display, EnumMessage, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum ActionChoice {
    #[strum(message = "View Cases", detailed_message = "Browse and filter case records.")]
    ViewCases,
    #[strum(message = "Add Case", detailed_message = "Record a new case; it starts as Pending.")]
    AddCase,
    #[strum(
        message = "Assess Case",
        detailed_message = "Ask the model for a risk tier without saving anything."
    )]
    AssessCase,
    #[strum(message = "Update Case", detailed_message = "Change selected fields of a case.")]
    UpdateCase,
    #[strum(message = "Delete Case")]
    DeleteCase,
    #[strum(
        message = "Train Model",
        detailed_message = "Refit the model, optionally with new settings."
    )]
    TrainModel,
    #[strum(
        message = "Export Training History",
        detailed_message = "Write every fit of this session to CSV, TSV or JSON."
    )]
    ExportHistory,
    #[strum(message = "Quit")]
    Quit,
}
