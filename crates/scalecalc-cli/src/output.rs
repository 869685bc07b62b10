//! CLI output formatting and the JSON export document.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use scalecalc_core::SpeedupCurve;

/// Format a speedup value for table display.
#[must_use]
pub fn format_speedup(value: f64) -> String {
    if value.is_finite() {
        format!("{value:.3}")
    } else if value > 0.0 {
        "inf".to_string()
    } else {
        "-".to_string()
    }
}

/// Format a processor count: whole counts without a decimal point.
#[must_use]
pub fn format_processors(count: f64) -> String {
    if (count - count.round()).abs() < 1e-9 {
        format!("{count:.0}")
    } else {
        format!("{count:.1}")
    }
}

/// One exported curve with its legend label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveExport {
    /// Legend label of the curve.
    pub label: String,
    /// `(processor count, speedup)` points in curve order.
    pub points: Vec<(f64, f64)>,
}

impl CurveExport {
    /// Capture a computed curve under a label.
    #[must_use]
    pub fn new(label: impl Into<String>, curve: &SpeedupCurve) -> Self {
        Self {
            label: label.into(),
            points: curve.points().to_vec(),
        }
    }
}

/// All curves computed for one law.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LawExport {
    /// Law name, `Amdahl` or `Gustafson`.
    pub law: String,
    /// Chart title of the law.
    pub title: String,
    /// One entry per scenario, in scenario order.
    pub series: Vec<CurveExport>,
}

/// Top-level JSON export document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Export {
    /// One entry per evaluated law.
    pub laws: Vec<LawExport>,
}

impl Export {
    /// Pretty-printed JSON for stdout or a file.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Write a text artifact to a file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_text(path: &str, content: &str) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use scalecalc_core::gustafson_speedup;

    #[test]
    fn format_speedup_three_decimals() {
        assert_eq!(format_speedup(1.818_181_8), "1.818");
        assert_eq!(format_speedup(1.0), "1.000");
    }

    #[test]
    fn format_speedup_infinite() {
        assert_eq!(format_speedup(f64::INFINITY), "inf");
    }

    #[test]
    fn format_processors_whole() {
        assert_eq!(format_processors(1.0), "1");
        assert_eq!(format_processors(64.0), "64");
    }

    #[test]
    fn format_processors_fractional() {
        assert_eq!(format_processors(1.5), "1.5");
    }

    #[test]
    fn curve_export_captures_points() {
        let curve = gustafson_speedup(1.0, 0.9, &[1.0, 2.0]).unwrap();
        let export = CurveExport::new("t_p = 0.90 * T", &curve);
        assert_eq!(export.points.len(), 2);
        assert_eq!(export.label, "t_p = 0.90 * T");
    }

    #[test]
    fn export_round_trips_through_json() {
        let curve = gustafson_speedup(1.0, 0.9, &[1.0, 2.0]).unwrap();
        let export = Export {
            laws: vec![LawExport {
                law: "Gustafson".to_string(),
                title: "Gustafson-Barsis Law: Scaled Speedup".to_string(),
                series: vec![CurveExport::new("ideal", &curve)],
            }],
        };
        let json = export.to_json().unwrap();
        let back: Export = serde_json::from_str(&json).unwrap();
        assert_eq!(back, export);
    }
}
