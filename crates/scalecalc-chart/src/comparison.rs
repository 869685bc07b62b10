//! Comparison chart: several speedup curves on shared axes.

use crossterm::style::{Color as CtColor, SetForegroundColor};
use crossterm::Command;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, LegendPosition, Widget};
use ratatui::Frame;
use scalecalc_core::SpeedupCurve;

use crate::axis::AxisBounds;
use crate::style::SeriesStyle;

/// X-axis caption shared by all comparison charts.
pub const X_AXIS_LABEL: &str = "num processors";
/// Y-axis caption shared by all comparison charts.
pub const Y_AXIS_LABEL: &str = "speedup";

/// Tick labels per axis.
const TICKS_PER_AXIS: usize = 5;

/// One named line on a comparison chart.
#[derive(Debug, Clone)]
pub struct ChartSeries {
    label: String,
    style: SeriesStyle,
    points: Vec<(f64, f64)>,
}

impl ChartSeries {
    /// Build a series from a computed curve.
    ///
    /// Non-finite points are dropped so an unbounded asymptote simply
    /// renders as an empty overlay.
    #[must_use]
    pub fn new(label: impl Into<String>, style: SeriesStyle, curve: &SpeedupCurve) -> Self {
        let points = curve
            .points()
            .iter()
            .copied()
            .filter(|&(count, speedup)| count.is_finite() && speedup.is_finite())
            .collect();
        Self {
            label: label.into(),
            style,
            points,
        }
    }

    /// Legend label of this series.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Number of drawable points left after filtering.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the series has no drawable points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// A self-contained chart value: title, axis bounds, and series.
///
/// Rendering never mutates the chart, so one value can be drawn into a
/// frame, a buffer, and a string interchangeably.
#[derive(Debug, Clone)]
pub struct ComparisonChart {
    title: String,
    bounds: AxisBounds,
    series: Vec<ChartSeries>,
}

impl ComparisonChart {
    /// Create an empty chart with a title and x-axis bounds.
    #[must_use]
    pub fn new(title: impl Into<String>, bounds: AxisBounds) -> Self {
        Self {
            title: title.into(),
            bounds,
            series: Vec::new(),
        }
    }

    /// Chart title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Number of series on the chart.
    #[must_use]
    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    /// Append one series.
    pub fn push_series(&mut self, series: ChartSeries) {
        self.series.push(series);
    }

    /// Append the dotted asymptote overlay belonging to a labeled curve.
    pub fn push_limit(&mut self, label: &str, style: SeriesStyle, curve: &SpeedupCurve) {
        self.push_series(ChartSeries::new(format!("{label} limit"), style, curve));
    }

    /// Render into a frame region.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        frame.render_widget(self.widget(), area);
    }

    /// Render into a fresh buffer of the given size.
    #[must_use]
    pub fn render_to_buffer(&self, width: u16, height: u16) -> Buffer {
        let area = Rect::new(0, 0, width, height);
        let mut buffer = Buffer::empty(area);
        Widget::render(self.widget(), area, &mut buffer);
        buffer
    }

    /// Plain-text rendering, one line per terminal row.
    ///
    /// Suitable for files and piped output; trailing blanks are
    /// trimmed from every line.
    #[must_use]
    pub fn to_text(&self, width: u16, height: u16) -> String {
        let buffer = self.render_to_buffer(width, height);
        let mut text = String::with_capacity((usize::from(width) + 1) * usize::from(height));
        for y in 0..height {
            let mut line = String::with_capacity(usize::from(width));
            for x in 0..width {
                line.push_str(buffer[(x, y)].symbol());
            }
            text.push_str(line.trim_end());
            text.push('\n');
        }
        text
    }

    /// ANSI-colored rendering for attended terminals.
    ///
    /// Colors are emitted as escape sequences, so the result prints
    /// with ordinary `print!` and lands in the scrollback like any
    /// other output.
    #[must_use]
    pub fn to_ansi(&self, width: u16, height: u16) -> String {
        let buffer = self.render_to_buffer(width, height);
        let mut text = String::new();
        for y in 0..height {
            let mut current: Option<Color> = None;
            for x in 0..width {
                let cell = &buffer[(x, y)];
                if current != Some(cell.fg) {
                    let _ = SetForegroundColor(ansi_color(cell.fg)).write_ansi(&mut text);
                    current = Some(cell.fg);
                }
                text.push_str(cell.symbol());
            }
            let _ = SetForegroundColor(CtColor::Reset).write_ansi(&mut text);
            text.push('\n');
        }
        text
    }

    fn widget(&self) -> Chart<'_> {
        let datasets = self
            .series
            .iter()
            .map(|series| {
                Dataset::default()
                    .name(series.label.clone())
                    .marker(series.style.marker)
                    .graph_type(GraphType::Line)
                    .style(Style::default().fg(series.style.color))
                    .data(&series.points)
            })
            .collect();

        // Both axes share the processor-count bounds; points above the
        // top edge (for example a high asymptote) are clipped, not drawn.
        let x_axis = Axis::default()
            .title(X_AXIS_LABEL)
            .style(Style::default().fg(Color::Gray))
            .bounds(self.bounds.as_array())
            .labels(self.bounds.labels(TICKS_PER_AXIS));
        let y_axis = Axis::default()
            .title(Y_AXIS_LABEL)
            .style(Style::default().fg(Color::Gray))
            .bounds(self.bounds.as_array())
            .labels(self.bounds.labels(TICKS_PER_AXIS));

        Chart::new(datasets)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {} ", self.title)),
            )
            .x_axis(x_axis)
            .y_axis(y_axis)
            .legend_position(Some(LegendPosition::TopLeft))
            .hidden_legend_constraints((Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)))
    }
}

/// Assemble a comparison chart from prepared series.
#[must_use]
pub fn render_comparison(title: &str, series: Vec<ChartSeries>, bounds: AxisBounds) -> ComparisonChart {
    let mut chart = ComparisonChart::new(title, bounds);
    for entry in series {
        chart.push_series(entry);
    }
    chart
}

/// Map the palette onto crossterm's color names, matching the usual
/// terminal-backend correspondence.
fn ansi_color(color: Color) -> CtColor {
    match color {
        Color::Black => CtColor::Black,
        Color::Red => CtColor::DarkRed,
        Color::Green => CtColor::DarkGreen,
        Color::Yellow => CtColor::DarkYellow,
        Color::Blue => CtColor::DarkBlue,
        Color::Magenta => CtColor::DarkMagenta,
        Color::Cyan => CtColor::DarkCyan,
        Color::Gray => CtColor::Grey,
        Color::DarkGray => CtColor::DarkGrey,
        Color::LightRed => CtColor::Red,
        Color::LightGreen => CtColor::Green,
        Color::LightYellow => CtColor::Yellow,
        Color::LightBlue => CtColor::Blue,
        Color::LightMagenta => CtColor::Magenta,
        Color::LightCyan => CtColor::Cyan,
        Color::White => CtColor::White,
        _ => CtColor::Reset,
    }
}
