//! Scaling-model trait and the shared error type.
//!
//! `ScalingModel` is the public trait consumed by the application layer.
//! Models are pure: the same input always yields the same curve, and no
//! state survives a call.

use crate::curve::SpeedupCurve;
use crate::input::ScalingInput;

/// Error type for scaling-law evaluation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScalingError {
    /// An input precondition was violated.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Public trait for scaling-law models.
pub trait ScalingModel {
    /// Evaluate the law over the input, one curve point per processor count.
    ///
    /// The input is validated on every call; evaluation fails with
    /// `InvalidArgument` before any point is produced.
    fn speedup(&self, input: &ScalingInput) -> Result<SpeedupCurve, ScalingError>;

    /// Get the name of this model.
    fn name(&self) -> &'static str;
}
