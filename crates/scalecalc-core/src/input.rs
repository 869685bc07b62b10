//! Input bundle for scaling-law evaluation.

use crate::model::ScalingError;

/// Workload description evaluated by the scaling models.
///
/// `total_time` is the single-processor reference runtime `T`;
/// `parallel_time` is the portion `t_p` of it that parallelizes.
/// Models validate the bundle on every call, so an instance may hold
/// arbitrary values until it reaches a model.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalingInput {
    /// Total reference execution time `T`, strictly positive.
    pub total_time: f64,
    /// Parallelizable portion `t_p`, with `0 <= t_p <= T`.
    pub parallel_time: f64,
    /// Processor counts to evaluate, every element strictly positive.
    pub processors: Vec<f64>,
}

impl ScalingInput {
    /// Create an input bundle. No validation happens here; models
    /// validate on each call.
    #[must_use]
    pub fn new(total_time: f64, parallel_time: f64, processors: Vec<f64>) -> Self {
        Self {
            total_time,
            parallel_time,
            processors,
        }
    }

    /// Check all model preconditions, reporting the first violation.
    pub fn validate(&self) -> Result<(), ScalingError> {
        if !self.total_time.is_finite() || self.total_time <= 0.0 {
            return Err(ScalingError::InvalidArgument(format!(
                "total time must be positive and finite, got {}",
                self.total_time
            )));
        }
        if !self.parallel_time.is_finite()
            || self.parallel_time < 0.0
            || self.parallel_time > self.total_time
        {
            return Err(ScalingError::InvalidArgument(format!(
                "parallel time must satisfy 0 <= t_p <= T, got t_p = {} with T = {}",
                self.parallel_time, self.total_time
            )));
        }
        for (index, &count) in self.processors.iter().enumerate() {
            if !count.is_finite() || count <= 0.0 {
                return Err(ScalingError::InvalidArgument(format!(
                    "processor count at index {index} must be positive and finite, got {count}"
                )));
            }
        }
        Ok(())
    }

    /// Serial portion `T - t_p` of the workload.
    #[must_use]
    pub fn serial_time(&self) -> f64 {
        self.total_time - self.parallel_time
    }

    /// Parallel fraction `t_p / T`. Meaningful only for validated inputs.
    #[must_use]
    pub fn parallel_fraction(&self) -> f64 {
        self.parallel_time / self.total_time
    }
}
