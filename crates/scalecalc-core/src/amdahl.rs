//! Amdahl's law: fixed-workload (strong scaling) speedup.
//!
//! For a workload with serial portion `T - t_p` and parallelizable
//! portion `t_p`, the predicted speedup on `n` processors is
//!
//! ```text
//! speedup(n) = T / ((T - t_p) + t_p / n)
//! ```
//!
//! The serial portion bounds what parallelism can buy: as `n` grows the
//! curve approaches `T / (T - t_p)` from below.

use crate::curve::SpeedupCurve;
use crate::input::ScalingInput;
use crate::model::{ScalingError, ScalingModel};

/// Amdahl's law model for a fixed workload.
#[derive(Debug, Clone, Copy, Default)]
pub struct AmdahlModel;

impl AmdahlModel {
    /// Create a new Amdahl model.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Asymptotic speedup bound `T / (T - t_p)`, repeated once per
    /// processor count so it overlays a speedup curve directly.
    ///
    /// For a fully parallel workload (`t_p == T`) the bound is positive
    /// infinity under IEEE division.
    pub fn limit(&self, input: &ScalingInput) -> Result<SpeedupCurve, ScalingError> {
        input.validate()?;
        let bound = input.total_time / input.serial_time();
        let points = input
            .processors
            .iter()
            .map(|&count| (count, bound))
            .collect();
        Ok(SpeedupCurve::from_points(points))
    }
}

impl ScalingModel for AmdahlModel {
    fn speedup(&self, input: &ScalingInput) -> Result<SpeedupCurve, ScalingError> {
        input.validate()?;
        let serial = input.serial_time();
        let points = input
            .processors
            .iter()
            .map(|&count| {
                let speedup = input.total_time / (serial + input.parallel_time / count);
                (count, speedup)
            })
            .collect();
        Ok(SpeedupCurve::from_points(points))
    }

    fn name(&self) -> &'static str {
        "Amdahl"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn speedups(input: &ScalingInput) -> Vec<f64> {
        AmdahlModel::new()
            .speedup(input)
            .unwrap()
            .speedups()
            .collect()
    }

    #[test]
    fn matches_reference_values() {
        let input = ScalingInput::new(1.0, 0.9, vec![1.0, 2.0, 4.0, 8.0, 16.0]);
        let expected = [1.0, 1.818_182, 3.076_923, 4.705_882, 6.4];
        for (got, want) in speedups(&input).iter().zip(expected) {
            assert!((got - want).abs() < 1e-6, "got {got}, want {want}");
        }
    }

    #[test]
    fn single_processor_is_baseline() {
        let input = ScalingInput::new(3.0, 2.4, vec![1.0]);
        let got = speedups(&input)[0];
        assert!((got - 1.0).abs() < 1e-9);
    }

    #[test]
    fn zero_parallel_time_gives_constant_one() {
        let input = ScalingInput::new(1.0, 0.0, vec![1.0, 2.0, 64.0, 1024.0]);
        for got in speedups(&input) {
            assert!((got - 1.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn fully_parallel_matches_processor_counts() {
        // Powers of two divide exactly, so equality is exact here.
        let input = ScalingInput::new(1.0, 1.0, vec![1.0, 2.0, 4.0, 8.0]);
        assert_eq!(speedups(&input), vec![1.0, 2.0, 4.0, 8.0]);
    }

    #[test]
    fn speedup_never_exceeds_limit() {
        let input = ScalingInput::new(1.0, 0.9, vec![1.0, 10.0, 100.0, 10_000.0]);
        let limit = AmdahlModel::new().limit(&input).unwrap();
        let bound = limit.points()[0].1;
        for got in speedups(&input) {
            assert!(got <= bound);
        }
    }

    #[test]
    fn limit_is_constant_across_counts() {
        let input = ScalingInput::new(1.0, 0.9, vec![1.0, 2.0, 4.0]);
        let limit = AmdahlModel::new().limit(&input).unwrap();
        let values: Vec<f64> = limit.speedups().collect();
        assert!((values[0] - 10.0).abs() < 1e-6);
        assert!(values.iter().all(|&v| v == values[0]));
        let counts: Vec<f64> = limit.processor_counts().collect();
        assert_eq!(counts, vec![1.0, 2.0, 4.0]);
    }

    #[test]
    fn fully_parallel_limit_is_infinite() {
        let input = ScalingInput::new(1.0, 1.0, vec![1.0, 2.0]);
        let limit = AmdahlModel::new().limit(&input).unwrap();
        assert!(limit.speedups().all(f64::is_infinite));
    }

    #[test]
    fn invalid_processor_fails_without_output() {
        let input = ScalingInput::new(1.0, 0.9, vec![1.0, 2.0, -4.0, 8.0]);
        assert!(AmdahlModel::new().speedup(&input).is_err());
        assert!(AmdahlModel::new().limit(&input).is_err());
    }

    #[test]
    fn empty_processors_give_empty_curve() {
        let input = ScalingInput::new(1.0, 0.9, vec![]);
        let curve = AmdahlModel::new().speedup(&input).unwrap();
        assert!(curve.is_empty());
    }

    #[test]
    fn model_name() {
        assert_eq!(AmdahlModel::new().name(), "Amdahl");
    }
}
