//! Speedup curves produced by the scaling models.

use serde::{Deserialize, Serialize};

/// A computed speedup curve: `(processor count, speedup)` points in the
/// order of the input's processor sequence.
///
/// Curves are plain values. Rendering and export layers consume them
/// without mutating them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeedupCurve {
    points: Vec<(f64, f64)>,
}

impl SpeedupCurve {
    /// Build a curve from precomputed points. Only models construct
    /// curves; everything else reads them.
    pub(crate) fn from_points(points: Vec<(f64, f64)>) -> Self {
        Self { points }
    }

    /// All `(processor count, speedup)` points.
    #[must_use]
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Number of points on the curve.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the curve has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Speedup values in curve order.
    pub fn speedups(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|&(_, speedup)| speedup)
    }

    /// Processor counts in curve order.
    pub fn processor_counts(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|&(count, _)| count)
    }

    /// Largest finite speedup on the curve, if any point is finite.
    #[must_use]
    pub fn max_speedup(&self) -> Option<f64> {
        self.speedups()
            .filter(|speedup| speedup.is_finite())
            .fold(None, |best, speedup| match best {
                Some(current) if current >= speedup => best,
                _ => Some(speedup),
            })
    }
}
