// File: crates/scatter-core/src/theme.rs
// Summary: Colors for figure rendering and the per-series color cycle.

use skia_safe as skia;

/// The ten-color "tab10" cycle, so files get the colors a matplotlib user expects.
pub const SERIES_PALETTE: [skia::Color; 10] = [
    skia::Color::new(0xFF1F77B4), // blue
    skia::Color::new(0xFFFF7F0E), // orange
    skia::Color::new(0xFF2CA02C), // green
    skia::Color::new(0xFFD62728), // red
    skia::Color::new(0xFF9467BD), // purple
    skia::Color::new(0xFF8C564B), // brown
    skia::Color::new(0xFFE377C2), // pink
    skia::Color::new(0xFF7F7F7F), // gray
    skia::Color::new(0xFFBCBD22), // olive
    skia::Color::new(0xFF17BECF), // cyan
];

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub legend_fill: skia::Color,
    pub legend_border: skia::Color,
    pub palette: &'static [skia::Color],
}

impl Theme {
    pub fn light() -> Self {
        Self {
            background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 235, 235, 238),
            axis_line: skia::Color::from_argb(255, 40, 40, 45),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            tick: skia::Color::from_argb(255, 60, 60, 70),
            legend_fill: skia::Color::from_argb(220, 255, 255, 255),
            legend_border: skia::Color::from_argb(255, 204, 204, 204),
            palette: &SERIES_PALETTE,
        }
    }

    /// Color for the `index`-th series; wraps around the palette.
    pub fn series_color(&self, index: usize) -> skia::Color {
        if self.palette.is_empty() {
            return self.axis_line;
        }
        self.palette[index % self.palette.len()]
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}
