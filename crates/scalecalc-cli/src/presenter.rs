//! Aligned speedup tables for labeled curves.

use console::style;

use scalecalc_core::SpeedupCurve;

use crate::output::{format_processors, format_speedup};

/// Header of the processor-count column.
const PROC_HEADER: &str = "num processors";

/// Check if color output is disabled via the `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// Whether styled stdout output is appropriate right now.
#[must_use]
pub fn color_enabled() -> bool {
    !is_color_disabled() && console::user_attended()
}

/// Renders speedup tables, one column per labeled curve.
pub struct TablePresenter {
    color: bool,
}

impl TablePresenter {
    /// Create a presenter. Color styles the title line only; cells stay
    /// plain so column widths are stable.
    #[must_use]
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Render one law's table.
    ///
    /// The count column follows the first curve's processor grid; rows
    /// cover the longest curve, and shorter curves render `-` in their
    /// missing rows.
    #[must_use]
    pub fn render(&self, title: &str, curves: &[(String, SpeedupCurve)]) -> String {
        let mut out = String::new();
        if self.color {
            out.push_str(
                &style(title)
                    .bold()
                    .cyan()
                    .force_styling(true)
                    .to_string(),
            );
        } else {
            out.push_str(title);
        }
        out.push('\n');
        if curves.is_empty() {
            return out;
        }

        let proc_width = PROC_HEADER.len();
        let widths: Vec<usize> = curves
            .iter()
            .map(|(label, _)| label.len().max(8))
            .collect();

        out.push_str(&format!("{PROC_HEADER:>proc_width$}"));
        for ((label, _), width) in curves.iter().zip(&widths) {
            let width = *width;
            out.push_str(&format!("  {label:>width$}"));
        }
        out.push('\n');

        let rows = curves.iter().map(|(_, curve)| curve.len()).max().unwrap_or(0);
        for row in 0..rows {
            let count_cell = curves[0]
                .1
                .points()
                .get(row)
                .map_or_else(|| "-".to_string(), |&(count, _)| format_processors(count));
            out.push_str(&format!("{count_cell:>proc_width$}"));
            for ((_, curve), width) in curves.iter().zip(&widths) {
                let width = *width;
                let cell = curve
                    .points()
                    .get(row)
                    .map_or_else(|| "-".to_string(), |&(_, speedup)| format_speedup(speedup));
                out.push_str(&format!("  {cell:>width$}"));
            }
            out.push('\n');
        }
        out
    }

    /// Print the rendered table to stdout.
    pub fn print(&self, title: &str, curves: &[(String, SpeedupCurve)]) {
        print!("{}", self.render(title, curves));
    }
}
