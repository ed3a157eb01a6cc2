mod fit_snapshot;
mod training_history;

pub use fit_snapshot::{FitSnapshot, RefitTrigger};
pub use training_history::{HistoryFormat, TrainingHistory};
