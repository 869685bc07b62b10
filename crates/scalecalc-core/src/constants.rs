//! Constants for processor ranges, presets, and process exit codes.

/// Default lower bound of the processor-count range.
pub const DEFAULT_MIN_PROCESSORS: f64 = 1.0;

/// Default upper bound of the processor-count range.
pub const DEFAULT_MAX_PROCESSORS: f64 = 64.0;

/// Default number of samples across the processor range.
pub const DEFAULT_SAMPLE_POINTS: usize = 50;

/// Default single-processor reference runtime `T`.
pub const DEFAULT_TOTAL_TIME: f64 = 1.0;

/// Conventional parallel-fraction presets, ideal workload first.
pub const DEFAULT_FRACTIONS: [f64; 4] = [1.0, 0.90, 0.95, 0.99];

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Invalid argument or configuration.
    pub const ERROR_CONFIG: i32 = 2;
}
