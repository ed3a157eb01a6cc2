use crate::evaluation::format_metric;
use serde::Serialize;
use std::fmt::{Display, Formatter, Result};
use strum_macros::{Display as StrumDisplay, IntoStaticStr};

/// What caused a refit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, StrumDisplay, IntoStaticStr)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum RefitTrigger {
    Startup,
    Add,
    Update,
    Delete,
    Manual,
    Reconfigure,
}

/// Outcome of one successful fit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FitSnapshot {
    pub fit_number: u64,
    pub trigger: RefitTrigger,
    pub training_size: usize,
    pub test_size: usize,
    pub accuracy: f64,
    pub kappa: f64,
}

impl Display for FitSnapshot {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "#{} ({}): train={}, test={}, acc={}, kappa={}",
            self.fit_number,
            self.trigger,
            self.training_size,
            self.test_size,
            format_metric(self.accuracy),
            format_metric(self.kappa)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_line() {
        let s = FitSnapshot {
            fit_number: 2,
            trigger: RefitTrigger::Add,
            training_size: 16,
            test_size: 4,
            accuracy: 0.5,
            kappa: f64::NAN,
        };
        assert_eq!(s.to_string(), "#2 (add): train=16, test=4, acc=0.50, kappa=n/a");
    }
}
