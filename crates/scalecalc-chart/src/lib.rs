//! # scalecalc-chart
//!
//! Comparison-chart rendering for scaling-law curves using ratatui.
//! A chart is a plain value built from computed curves; rendering
//! writes into a buffer, a frame, or a string and keeps no state
//! between calls.

pub mod axis;
pub mod comparison;
pub mod style;

pub use axis::AxisBounds;
pub use comparison::{render_comparison, ChartSeries, ComparisonChart, X_AXIS_LABEL, Y_AXIS_LABEL};
pub use style::SeriesStyle;
