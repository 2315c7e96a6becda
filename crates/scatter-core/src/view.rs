// File: crates/scatter-core/src/view.rs
// Summary: Visible data ranges derived from the figure's series.

use crate::Figure;

/// Fraction of the data span added on each side, as matplotlib does by default.
pub const DATA_MARGIN: f64 = 0.05;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ViewState {
    /// Extents of every finite point across all series, padded by [`DATA_MARGIN`].
    /// Falls back to the unit square when there is nothing to show.
    pub fn from_figure(figure: &Figure) -> Self {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for s in figure.series() {
            for (x, y) in s.finite_points() {
                x_min = x_min.min(x);
                x_max = x_max.max(x);
                y_min = y_min.min(y);
                y_max = y_max.max(y);
            }
        }
        if !x_min.is_finite() || !y_min.is_finite() {
            return Self { x_min: 0.0, x_max: 1.0, y_min: 0.0, y_max: 1.0 };
        }
        let (x_min, x_max) = pad(x_min, x_max);
        let (y_min, y_max) = pad(y_min, y_max);
        Self { x_min, x_max, y_min, y_max }
    }

    pub fn apply_to_figure(&self, figure: &mut Figure) {
        figure.x_axis.min = self.x_min;
        figure.x_axis.max = self.x_max;
        figure.y_axis.min = self.y_min;
        figure.y_axis.max = self.y_max;
    }
}

fn pad(mut min: f64, mut max: f64) -> (f64, f64) {
    if (max - min).abs() < 1e-9 {
        let half = if min.abs() > 1e-9 { min.abs() * DATA_MARGIN } else { 0.5 };
        min -= half;
        max += half;
    }
    let m = (max - min) * DATA_MARGIN;
    (min - m, max + m)
}
