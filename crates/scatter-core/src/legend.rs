// File: crates/scatter-core/src/legend.rs
// Summary: Legend model (one entry per series) and its layout in the plot's upper-right corner.

use skia_safe as skia;

use crate::geometry::RectI32;
use crate::series::{Marker, Series};
use crate::text::{Anchor, TextShaper};
use crate::theme::Theme;

const MARGIN: f32 = 10.0;
const PADDING: f32 = 8.0;
const ROW_HEIGHT: f32 = 20.0;
const MARKER_COLUMN: f32 = 24.0;
const FONT_SIZE: f32 = 13.0;

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub marker: Marker,
    /// Index into the theme's series palette.
    pub color_index: usize,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Legend {
    entries: Vec<LegendEntry>,
}

impl Legend {
    pub fn from_series(series: &[Series]) -> Self {
        let entries = series
            .iter()
            .enumerate()
            .map(|(i, s)| LegendEntry { label: s.label.clone(), marker: s.marker, color_index: i })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[LegendEntry] { &self.entries }

    pub fn labels(&self) -> Vec<&str> { self.entries.iter().map(|e| e.label.as_str()).collect() }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// Box in pixel coordinates, anchored to the upper-right of `plot`.
    pub(crate) fn frame(&self, plot: RectI32, shaper: Option<&TextShaper>) -> skia::Rect {
        let text_w = shaper
            .map(|sh| {
                self.entries
                    .iter()
                    .map(|e| sh.measure_width(&e.label, FONT_SIZE, false))
                    .fold(0.0_f32, f32::max)
            })
            .unwrap_or(0.0);
        let w = PADDING * 2.0 + MARKER_COLUMN + text_w;
        let h = PADDING * 2.0 + ROW_HEIGHT * self.entries.len() as f32;
        let right = plot.right as f32 - MARGIN;
        let top = plot.top as f32 + MARGIN;
        skia::Rect::from_ltrb(right - w, top, right, top + h)
    }

    pub(crate) fn draw(
        &self,
        canvas: &skia::Canvas,
        shaper: Option<&TextShaper>,
        plot: RectI32,
        theme: &Theme,
        marker_size: f32,
    ) {
        if self.entries.is_empty() {
            return;
        }

        let frame = self.frame(plot, shaper);
        let rrect = skia::RRect::new_rect_xy(frame, 4.0, 4.0);

        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_style(skia::paint::Style::Fill);
        fill.set_color(theme.legend_fill);
        canvas.draw_rrect(&rrect, &fill);

        let mut border = skia::Paint::default();
        border.set_anti_alias(true);
        border.set_style(skia::paint::Style::Stroke);
        border.set_stroke_width(1.0);
        border.set_color(theme.legend_border);
        canvas.draw_rrect(&rrect, &border);

        let mut marker_paint = skia::Paint::default();
        marker_paint.set_anti_alias(true);
        marker_paint.set_style(skia::paint::Style::Fill);

        for (i, entry) in self.entries.iter().enumerate() {
            let cy = frame.top + PADDING + ROW_HEIGHT * (i as f32 + 0.5);
            let cx = frame.left + PADDING + MARKER_COLUMN * 0.5;
            marker_paint.set_color(theme.series_color(entry.color_index));
            entry.marker.draw(canvas, cx, cy, marker_size, &marker_paint);

            if let Some(sh) = shaper {
                let x = frame.left + PADDING + MARKER_COLUMN;
                sh.draw(canvas, &entry.label, x, cy, Anchor::Left, FONT_SIZE, theme.axis_label, false);
            }
        }
    }
}
