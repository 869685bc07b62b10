//! Gustafson-Barsis law: scaled-workload (weak scaling) speedup.
//!
//! The workload grows with the processor count, so the parallel
//! fraction `f_p = t_p / T` scales instead of saturating:
//!
//! ```text
//! scaled_speedup(n) = (1 - f_p) + f_p * n
//! ```
//!
//! The curve is affine in `n` and, unlike Amdahl's law, unbounded for
//! any `f_p > 0`.

use crate::curve::SpeedupCurve;
use crate::input::ScalingInput;
use crate::model::{ScalingError, ScalingModel};

/// Gustafson-Barsis law model for a scaled workload.
#[derive(Debug, Clone, Copy, Default)]
pub struct GustafsonModel;

impl GustafsonModel {
    /// Create a new Gustafson model.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ScalingModel for GustafsonModel {
    fn speedup(&self, input: &ScalingInput) -> Result<SpeedupCurve, ScalingError> {
        input.validate()?;
        let parallel_fraction = input.parallel_fraction();
        let serial_fraction = 1.0 - parallel_fraction;
        let points = input
            .processors
            .iter()
            .map(|&count| (count, serial_fraction + parallel_fraction * count))
            .collect();
        Ok(SpeedupCurve::from_points(points))
    }

    fn name(&self) -> &'static str {
        "Gustafson"
    }
}
