//! Per-series line styles for comparison charts.

use ratatui::style::Color;
use ratatui::symbols::Marker;

/// Rotating palette for scenario curves, in the conventional
/// green/blue/red order.
const PALETTE: [Color; 6] = [
    Color::Green,
    Color::Blue,
    Color::Red,
    Color::Magenta,
    Color::Cyan,
    Color::Yellow,
];

/// Visual style of one chart series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesStyle {
    /// Line color.
    pub color: Color,
    /// Point marker; `Marker::Braille` draws a smooth line.
    pub marker: Marker,
}

impl SeriesStyle {
    /// Solid line in the given color.
    #[must_use]
    pub const fn solid(color: Color) -> Self {
        Self {
            color,
            marker: Marker::Braille,
        }
    }

    /// Dotted line in the given color, used for asymptote overlays.
    #[must_use]
    pub const fn dotted(color: Color) -> Self {
        Self {
            color,
            marker: Marker::Dot,
        }
    }

    /// Style of the ideal (fully parallel) reference curve.
    #[must_use]
    pub const fn ideal() -> Self {
        Self::solid(Color::Gray)
    }

    /// Solid style for the `index`-th scenario curve, cycling the palette.
    #[must_use]
    pub fn for_scenario(index: usize) -> Self {
        Self::solid(PALETTE[index % PALETTE.len()])
    }

    /// The same color as a dotted overlay.
    #[must_use]
    pub const fn to_dotted(self) -> Self {
        Self {
            color: self.color,
            marker: Marker::Dot,
        }
    }
}
