mod case;
mod filter;
mod seed;
mod store;
mod update;

pub use case::{
    Assessment, CaseId, CaseRecord, Category, ConsentStatus, PENDING_RESOLUTION, RiskTier,
};
pub use filter::CaseFilter;
pub use seed::seed_cases;
pub use store::{CaseStore, TrainingPair};
pub use update::CaseUpdate;
