// File: crates/scatter-core/src/series.rs
// Summary: Labeled scatter series and the marker shapes used to draw them.

use skia_safe as skia;

use crate::error::FigureError;

/// Point marker shape. Square is what the plot driver always uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Marker {
    #[default]
    Square,
    Circle,
}

impl Marker {
    /// Fill one marker of edge length `size` centered on `(cx, cy)`.
    pub(crate) fn draw(&self, canvas: &skia::Canvas, cx: f32, cy: f32, size: f32, paint: &skia::Paint) {
        let half = size * 0.5;
        match self {
            Marker::Square => {
                let rect = skia::Rect::from_ltrb(cx - half, cy - half, cx + half, cy + half);
                canvas.draw_rect(rect, paint);
            }
            Marker::Circle => {
                canvas.draw_circle((cx, cy), half, paint);
            }
        }
    }
}

/// One labeled set of (x, y) points, kept in row order.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub label: String,
    pub points: Vec<(f64, f64)>,
    pub marker: Marker,
}

impl Series {
    pub fn new(label: impl Into<String>, points: Vec<(f64, f64)>) -> Self {
        Self { label: label.into(), points, marker: Marker::default() }
    }

    /// Pair two columns row by row. Fails if the columns differ in length.
    pub fn from_columns(label: impl Into<String>, xs: Vec<f64>, ys: Vec<f64>) -> Result<Self, FigureError> {
        let label = label.into();
        if xs.len() != ys.len() {
            return Err(FigureError::LengthMismatch { label, x_len: xs.len(), y_len: ys.len() });
        }
        Ok(Self::new(label, xs.into_iter().zip(ys).collect()))
    }

    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.marker = marker;
        self
    }

    pub fn len(&self) -> usize { self.points.len() }

    pub fn is_empty(&self) -> bool { self.points.is_empty() }

    pub fn xs(&self) -> impl Iterator<Item = f64> + '_ { self.points.iter().map(|&(x, _)| x) }

    pub fn ys(&self) -> impl Iterator<Item = f64> + '_ { self.points.iter().map(|&(_, y)| y) }

    /// Points with both coordinates finite; empty CSV cells load as NaN and are not drawn.
    pub fn finite_points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.points.iter().copied().filter(|(x, y)| x.is_finite() && y.is_finite())
    }
}
