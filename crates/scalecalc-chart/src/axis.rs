//! Axis bounds and tick labels.

use scalecalc_core::range::linspace;

/// Inclusive value range of one chart axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisBounds {
    /// Lower bound of the axis.
    pub min: f64,
    /// Upper bound of the axis.
    pub max: f64,
}

impl AxisBounds {
    /// Create axis bounds.
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Bounds in the `[min, max]` form ratatui expects.
    #[must_use]
    pub const fn as_array(self) -> [f64; 2] {
        [self.min, self.max]
    }

    /// Evenly spaced tick labels across the bounds, endpoints included.
    #[must_use]
    pub fn labels(self, count: usize) -> Vec<String> {
        linspace(self.min, self.max, count)
            .into_iter()
            .map(format_tick)
            .collect()
    }
}

/// Compact tick formatting: whole numbers without a decimal point,
/// everything else with one decimal.
fn format_tick(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}
