//! Parallel-fraction scenarios compared on a single chart.

use crate::constants::DEFAULT_FRACTIONS;
use crate::input::ScalingInput;

/// A labeled parallel-fraction preset for one comparison curve.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    /// Legend label, e.g. `t_p = 0.90 * T`.
    pub label: String,
    /// Fraction of `T` that parallelizes; `1.0` is the ideal workload.
    pub portion: f64,
}

impl Scenario {
    /// Create a scenario with the conventional label for its portion.
    #[must_use]
    pub fn new(portion: f64) -> Self {
        let label = if (portion - 1.0).abs() < f64::EPSILON {
            "ideal".to_string()
        } else {
            format!("t_p = {portion:.2} * T")
        };
        Self { label, portion }
    }

    /// Create a scenario with an explicit label.
    #[must_use]
    pub fn labeled(label: impl Into<String>, portion: f64) -> Self {
        Self {
            label: label.into(),
            portion,
        }
    }

    /// The fully parallel workload.
    #[must_use]
    pub fn ideal() -> Self {
        Self::new(1.0)
    }

    /// Whether this is the fully parallel workload.
    #[must_use]
    pub fn is_ideal(&self) -> bool {
        (self.portion - 1.0).abs() < f64::EPSILON
    }

    /// Concrete model input for this scenario: `t_p = portion * T`.
    #[must_use]
    pub fn input(&self, total_time: f64, processors: &[f64]) -> ScalingInput {
        ScalingInput::new(total_time, self.portion * total_time, processors.to_vec())
    }
}

/// The conventional comparison set: ideal plus 0.90, 0.95, and 0.99.
#[must_use]
pub fn default_scenarios() -> Vec<Scenario> {
    scenarios_from_fractions(&DEFAULT_FRACTIONS)
}

/// Build scenarios from explicit fractions, labeling each conventionally.
#[must_use]
pub fn scenarios_from_fractions(fractions: &[f64]) -> Vec<Scenario> {
    fractions
        .iter()
        .map(|&portion| Scenario::new(portion))
        .collect()
}
