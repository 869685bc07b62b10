//! Application configuration from CLI flags and environment.

use clap::Parser;

use scalecalc_core::model::ScalingError;

/// ScaleCalc-rs — Parallel scaling-law calculator and chart renderer.
#[derive(Parser, Debug)]
#[command(name = "scalecalc", version, about)]
pub struct AppConfig {
    /// Scaling law to evaluate: amdahl, gustafson, or both.
    #[arg(short, long, default_value = "both", env = "SCALECALC_LAW")]
    pub law: String,

    /// Lower bound of the processor-count range.
    #[arg(long, default_value = "1")]
    pub min_procs: f64,

    /// Upper bound of the processor-count range.
    #[arg(long, default_value = "64")]
    pub max_procs: f64,

    /// Number of samples across the processor range.
    #[arg(long, default_value = "50")]
    pub points: usize,

    /// Single-processor reference runtime T.
    #[arg(short, long, default_value = "1.0")]
    pub total_time: f64,

    /// Comma-separated parallel fractions of T to compare (1.0 = ideal).
    #[arg(short, long, default_value = "1.00,0.90,0.95,0.99")]
    pub fractions: String,

    /// Skip the dotted Amdahl asymptote overlays.
    #[arg(long)]
    pub no_limits: bool,

    /// Print a speedup table on a doubling grid instead of a chart.
    #[arg(long)]
    pub table: bool,

    /// Emit the computed curves as JSON.
    #[arg(short, long)]
    pub json: bool,

    /// Write the artifact to a file instead of stdout.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Chart width in terminal columns (0 = detect).
    #[arg(long, default_value = "0")]
    pub width: u16,

    /// Chart height in terminal rows (0 = default).
    #[arg(long, default_value = "0")]
    pub height: u16,

    /// Verbose logging.
    #[arg(short, long)]
    pub verbose: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Parse and range-check the fraction list.
    pub fn parallel_fractions(&self) -> Result<Vec<f64>, ScalingError> {
        let fractions = parse_fractions(&self.fractions).ok_or_else(|| {
            ScalingError::InvalidArgument(format!("invalid fraction list '{}'", self.fractions))
        })?;
        for &fraction in &fractions {
            if !(0.0..=1.0).contains(&fraction) {
                return Err(ScalingError::InvalidArgument(format!(
                    "fractions must lie in [0, 1], got {fraction}"
                )));
            }
        }
        Ok(fractions)
    }
}

/// Parse a comma-separated fraction list like "1.0,0.9,0.95".
fn parse_fractions(s: &str) -> Option<Vec<f64>> {
    let mut fractions = Vec::new();
    for part in s.split(',') {
        let part = part.trim();
        if part.is_empty() {
            return None;
        }
        fractions.push(part.parse().ok()?);
    }
    Some(fractions)
}
