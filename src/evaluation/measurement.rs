use serde::Serialize;
use std::fmt::{Display, Formatter};

/// Named scalar reported by a [`PerformanceEvaluator`], e.g. `"accuracy"`.
///
/// [`PerformanceEvaluator`]: crate::evaluation::PerformanceEvaluator
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Measurement {
    pub name: String,
    pub value: f64,
}

impl Measurement {
    #[inline]
    pub fn new<N: Into<String>>(name: N, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Formats a metric with two decimals, or `n/a` when it is not finite.
pub fn format_metric(value: f64) -> String {
    if value.is_finite() {
        format!("{value:.2}")
    } else {
        "n/a".to_string()
    }
}

impl Display for Measurement {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name, format_metric(self.value))
    }
}
