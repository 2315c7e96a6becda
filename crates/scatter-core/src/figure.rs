// File: crates/scatter-core/src/figure.rs
// Summary: Figure struct and headless PNG rendering pipeline using Skia CPU raster surfaces.

use std::io::Write;
use std::path::Path;

use skia_safe as skia;

use crate::geometry::RectI32;
use crate::grid::{category_ticks, nice_ticks, Ticks};
use crate::legend::Legend;
use crate::scale::LinearScale;
use crate::series::Series;
use crate::text::{Anchor, TextShaper};
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};
use crate::view::ViewState;
use crate::{Axis, FigureError};

const TICK_COUNT: u32 = 8;
const TICK_LEN: f32 = 5.0;
const TICK_FONT_SIZE: f32 = 12.0;
const AXIS_TITLE_FONT_SIZE: f32 = 15.0;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Text is platform-font dependent; pixel tests switch it off.
    pub draw_labels: bool,
    /// Marker edge length in pixels.
    pub marker_size: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
            marker_size: 7.0,
        }
    }
}

/// A scatter figure: series drawn as point markers over shared axes, with a legend.
///
/// Each `Figure` owns all of its state, so building several in one process
/// never leaks series or labels between them.
#[derive(Clone, Debug, Default)]
pub struct Figure {
    series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

impl Figure {
    pub fn new() -> Self { Self::default() }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    pub fn series(&self) -> &[Series] { &self.series }

    pub fn set_x_label(&mut self, label: impl Into<String>) {
        self.x_axis.label = label.into();
    }

    pub fn set_y_label(&mut self, label: impl Into<String>) {
        self.y_axis.label = label.into();
    }

    /// One legend entry per series, in the order the series were added.
    pub fn legend(&self) -> Legend { Legend::from_series(&self.series) }

    /// Fit both axes to the data, see [`ViewState::from_figure`].
    pub fn autoscale_axes(&mut self) {
        let view = ViewState::from_figure(self);
        log::debug!(
            "autoscaled axes: x [{:.4}, {:.4}], y [{:.4}, {:.4}]",
            view.x_min, view.x_max, view.y_min, view.y_max
        );
        view.apply_to_figure(self);
    }

    /// Render the figure and write it as a PNG to `output_png_path`.
    ///
    /// The image is written to a temporary file next to the target and renamed
    /// over it, so an existing file is either fully replaced or left as it was.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> Result<(), FigureError> {
        let bytes = self.render_to_png_bytes(opts)?;
        let path = output_png_path.as_ref();
        let write_err = |source| FigureError::Write { path: path.to_path_buf(), source };

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = tempfile::Builder::new().prefix(".").suffix(".png.tmp").tempfile_in(dir).map_err(write_err)?;
        tmp.write_all(&bytes).map_err(write_err)?;
        #[cfg(unix)]
        {
            // temp files are created owner-only; the image should be world-readable like any other output
            use std::os::unix::fs::PermissionsExt;
            tmp.as_file().set_permissions(std::fs::Permissions::from_mode(0o644)).map_err(write_err)?;
        }
        tmp.as_file().sync_all().map_err(write_err)?;
        tmp.persist(path).map_err(|e| write_err(e.error))?;
        Ok(())
    }

    /// Render the figure into an in-memory PNG.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>, FigureError> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or(FigureError::Surface { width: opts.width, height: opts.height })?;
        let canvas = surface.canvas();
        let theme = &opts.theme;

        canvas.clear(theme.background);

        let plot = RectI32::inset(opts.width, opts.height, &opts.insets);
        let xs = LinearScale::new(plot.left as f32, plot.right as f32, self.x_axis.min, self.x_axis.max);
        let ys = LinearScale::new(plot.bottom as f32, plot.top as f32, self.y_axis.min, self.y_axis.max);
        let x_ticks = axis_ticks(&self.x_axis);
        let y_ticks = axis_ticks(&self.y_axis);

        let shaper = opts.draw_labels.then(TextShaper::new);

        draw_grid(canvas, plot, &xs, &ys, &x_ticks, &y_ticks, theme);
        draw_axes(canvas, plot, &xs, &ys, &x_ticks, &y_ticks, theme);
        if let Some(sh) = &shaper {
            draw_tick_labels(canvas, sh, plot, (&xs, &self.x_axis), (&ys, &self.y_axis), &x_ticks, &y_ticks, theme);
            draw_axis_titles(canvas, sh, plot, &self.x_axis, &self.y_axis, theme);
        }

        for (i, s) in self.series.iter().enumerate() {
            draw_scatter_series(canvas, &xs, &ys, s, theme.series_color(i), opts.marker_size);
        }

        self.legend().draw(canvas, shaper.as_ref(), plot, theme, opts.marker_size);

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image.encode_to_data(skia::EncodedImageFormat::PNG).ok_or(FigureError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }
}

// ---- helpers ----------------------------------------------------------------

fn axis_ticks(axis: &Axis) -> Ticks {
    if axis.is_categorical() {
        category_ticks(&axis.categories, axis.min, axis.max)
    } else {
        nice_ticks(axis.min, axis.max, TICK_COUNT)
    }
}

fn draw_grid(
    canvas: &skia::Canvas,
    plot: RectI32,
    xs: &LinearScale,
    ys: &LinearScale,
    x_ticks: &Ticks,
    y_ticks: &Ticks,
    theme: &Theme,
) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);
    for x in x_ticks.values.iter().map(|&v| xs.to_px(v)).filter(|&px| xs.contains_px(px)) {
        canvas.draw_line((x, t), (x, b), &paint);
    }
    for y in y_ticks.values.iter().map(|&v| ys.to_px(v)).filter(|&py| ys.contains_px(py)) {
        canvas.draw_line((l, y), (r, y), &paint);
    }
}

fn draw_axes(
    canvas: &skia::Canvas,
    plot: RectI32,
    xs: &LinearScale,
    ys: &LinearScale,
    x_ticks: &Ticks,
    y_ticks: &Ticks,
    theme: &Theme,
) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_style(skia::paint::Style::Stroke);
    axis_paint.set_stroke_width(1.0);

    let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);
    canvas.draw_rect(skia::Rect::from_ltrb(l, t, r, b), &axis_paint);

    let mut tick_paint = skia::Paint::default();
    tick_paint.set_color(theme.tick);
    tick_paint.set_anti_alias(true);
    tick_paint.set_stroke_width(1.0);

    for x in x_ticks.values.iter().map(|&v| xs.to_px(v)).filter(|&px| xs.contains_px(px)) {
        canvas.draw_line((x, b), (x, b + TICK_LEN), &tick_paint);
    }
    for y in y_ticks.values.iter().map(|&v| ys.to_px(v)).filter(|&py| ys.contains_px(py)) {
        canvas.draw_line((l - TICK_LEN, y), (l, y), &tick_paint);
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_tick_labels(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    plot: RectI32,
    (xs, x_axis): (&LinearScale, &Axis),
    (ys, y_axis): (&LinearScale, &Axis),
    x_ticks: &Ticks,
    y_ticks: &Ticks,
    theme: &Theme,
) {
    let (l, b) = (plot.left as f32, plot.bottom as f32);
    // category names read better in the proportional font
    let (x_mono, y_mono) = (!x_axis.is_categorical(), !y_axis.is_categorical());
    for (v, text) in x_ticks.iter() {
        let x = xs.to_px(v);
        if xs.contains_px(x) {
            let y = b + TICK_LEN + 4.0 + TICK_FONT_SIZE * 0.5;
            shaper.draw(canvas, text, x, y, Anchor::Center, TICK_FONT_SIZE, theme.tick, x_mono);
        }
    }
    for (v, text) in y_ticks.iter() {
        let y = ys.to_px(v);
        if ys.contains_px(y) {
            shaper.draw(canvas, text, l - TICK_LEN - 4.0, y, Anchor::Right, TICK_FONT_SIZE, theme.tick, y_mono);
        }
    }
}

fn draw_axis_titles(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    plot: RectI32,
    x_axis: &Axis,
    y_axis: &Axis,
    theme: &Theme,
) {
    if !x_axis.label.is_empty() {
        let y = plot.bottom as f32 + 44.0;
        shaper.draw(canvas, &x_axis.label, plot.center_x(), y, Anchor::Center, AXIS_TITLE_FONT_SIZE, theme.axis_label, false);
    }
    if !y_axis.label.is_empty() {
        let x = plot.left as f32 - 66.0;
        shaper.draw_vertical(canvas, &y_axis.label, x, plot.center_y(), AXIS_TITLE_FONT_SIZE, theme.axis_label);
    }
}

fn draw_scatter_series(
    canvas: &skia::Canvas,
    xs: &LinearScale,
    ys: &LinearScale,
    series: &Series,
    color: skia::Color,
    marker_size: f32,
) {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);

    for (x, y) in series.finite_points() {
        series.marker.draw(canvas, xs.to_px(x), ys.to_px(y), marker_size, &paint);
    }
}
