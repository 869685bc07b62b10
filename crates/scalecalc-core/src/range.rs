//! Processor-count grids for sampling the scaling curves.

/// Evenly spaced processor counts over `[min, max]`, endpoints included.
///
/// Follows the usual linspace convention: `points == 0` yields an empty
/// grid, `points == 1` yields just `min`, and the final sample is pinned
/// to exactly `max` so the chart reaches its right edge.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn linspace(min: f64, max: f64, points: usize) -> Vec<f64> {
    match points {
        0 => Vec::new(),
        1 => vec![min],
        _ => {
            let step = (max - min) / (points - 1) as f64;
            (0..points)
                .map(|i| {
                    if i == points - 1 {
                        max
                    } else {
                        min + step * i as f64
                    }
                })
                .collect()
        }
    }
}

/// The doubling grid within `[min, max]`: `min, 2*min, 4*min, ...`.
///
/// Returns an empty grid when the bounds cannot produce one
/// (non-positive or non-finite `min`, or `max < min`).
#[must_use]
pub fn doublings(min: f64, max: f64) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() || min <= 0.0 || max < min {
        return Vec::new();
    }
    let mut grid = Vec::new();
    let mut count = min;
    while count <= max {
        grid.push(count);
        count *= 2.0;
    }
    grid
}
