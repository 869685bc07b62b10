//! Law selection: mapping CLI-facing names to model instances.

use std::fmt;
use std::str::FromStr;

use crate::amdahl::AmdahlModel;
use crate::gustafson::GustafsonModel;
use crate::model::{ScalingError, ScalingModel};

/// The two supported scaling laws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalingLaw {
    /// Fixed workload, strong scaling.
    Amdahl,
    /// Scaled workload, weak scaling.
    Gustafson,
}

impl ScalingLaw {
    /// Chart title used when rendering this law.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Amdahl => "Amdahl's Law: Strong Scaling",
            Self::Gustafson => "Gustafson-Barsis Law: Scaled Speedup",
        }
    }

    /// Instantiate the model behind this law.
    #[must_use]
    pub fn model(self) -> Box<dyn ScalingModel> {
        match self {
            Self::Amdahl => Box::new(AmdahlModel::new()),
            Self::Gustafson => Box::new(GustafsonModel::new()),
        }
    }

    /// Resolve a law-selection argument: a single law name or `both`.
    pub fn select(arg: &str) -> Result<Vec<Self>, ScalingError> {
        match arg.trim().to_ascii_lowercase().as_str() {
            "both" => Ok(vec![Self::Amdahl, Self::Gustafson]),
            name => Ok(vec![name.parse()?]),
        }
    }
}

impl FromStr for ScalingLaw {
    type Err = ScalingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "amdahl" => Ok(Self::Amdahl),
            "gustafson" => Ok(Self::Gustafson),
            other => Err(ScalingError::InvalidArgument(format!(
                "unknown law '{other}', expected amdahl, gustafson, or both"
            ))),
        }
    }
}

impl fmt::Display for ScalingLaw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.model().name())
    }
}
