//! # scalecalc-core
//!
//! Core library for the ScaleCalc-rs parallel scaling-law calculator.
//! Implements Amdahl's law (strong scaling) and the Gustafson-Barsis
//! law (scaled speedup) over shared input and curve types.

pub mod amdahl;
pub mod constants;
pub mod curve;
pub mod gustafson;
pub mod input;
pub mod law;
pub mod model;
pub mod range;
pub mod scenario;

// Re-exports
pub use amdahl::AmdahlModel;
pub use constants::{
    exit_codes, DEFAULT_FRACTIONS, DEFAULT_MAX_PROCESSORS, DEFAULT_MIN_PROCESSORS,
    DEFAULT_SAMPLE_POINTS, DEFAULT_TOTAL_TIME,
};
pub use curve::SpeedupCurve;
pub use gustafson::GustafsonModel;
pub use input::ScalingInput;
pub use law::ScalingLaw;
pub use model::{ScalingError, ScalingModel};
pub use range::{doublings, linspace};
pub use scenario::{default_scenarios, scenarios_from_fractions, Scenario};

/// Predict Amdahl (strong scaling) speedups at each processor count
/// for a workload where `parallel_time` out of `total_time`
/// parallelizes.
///
/// This is a convenience function for simple use cases. For repeated
/// evaluation or trait-object dispatch, use [`AmdahlModel`] through the
/// [`ScalingModel`] trait directly.
///
/// # Example
/// ```
/// let curve = scalecalc_core::amdahl_speedup(1.0, 0.9, &[1.0, 2.0]).unwrap();
/// assert!((curve.points()[1].1 - 1.818_182).abs() < 1e-6);
/// ```
pub fn amdahl_speedup(
    total_time: f64,
    parallel_time: f64,
    processors: &[f64],
) -> Result<SpeedupCurve, ScalingError> {
    let input = ScalingInput::new(total_time, parallel_time, processors.to_vec());
    AmdahlModel::new().speedup(&input)
}

/// Amdahl's asymptotic speedup bound `T / (T - t_p)`, repeated at each
/// processor count so it overlays a speedup curve.
///
/// # Example
/// ```
/// let curve = scalecalc_core::amdahl_limit(1.0, 0.9, &[1.0, 2.0]).unwrap();
/// assert!((curve.points()[0].1 - 10.0).abs() < 1e-6);
/// ```
pub fn amdahl_limit(
    total_time: f64,
    parallel_time: f64,
    processors: &[f64],
) -> Result<SpeedupCurve, ScalingError> {
    let input = ScalingInput::new(total_time, parallel_time, processors.to_vec());
    AmdahlModel::new().limit(&input)
}

/// Predict Gustafson-Barsis (scaled) speedups at each processor count
/// for a workload where `parallel_time` out of `total_time`
/// parallelizes.
///
/// # Example
/// ```
/// let curve = scalecalc_core::gustafson_speedup(1.0, 0.9, &[1.0, 2.0]).unwrap();
/// assert!((curve.points()[1].1 - 1.9).abs() < 1e-6);
/// ```
pub fn gustafson_speedup(
    total_time: f64,
    parallel_time: f64,
    processors: &[f64],
) -> Result<SpeedupCurve, ScalingError> {
    let input = ScalingInput::new(total_time, parallel_time, processors.to_vec());
    GustafsonModel::new().speedup(&input)
}
