// File: crates/scatter-core/src/text.rs
// Summary: Text shaping and placement for axis titles, tick labels, and legend entries.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

/// Horizontal anchor for a laid-out string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Left,
    Center,
    Right,
}

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color, mono_numeric: bool) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        if mono_numeric {
            ts.set_font_families(&["DejaVu Sans Mono", "Menlo", "Consolas", "Roboto Mono", "monospace"]);
        } else {
            ts.set_font_families(&["DejaVu Sans", "Helvetica", "Arial", "Segoe UI", "Roboto", "sans-serif"]);
        }
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color, mono_numeric: bool) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(size, color, mono_numeric));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure_width(&self, text: &str, size: f32, mono_numeric: bool) -> f32 {
        self.layout(text, size, skia::Color::TRANSPARENT, mono_numeric).longest_line()
    }

    /// Draw `text` anchored horizontally at `x` and vertically centered on `y`.
    #[allow(clippy::too_many_arguments)]
    pub fn draw(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        x: f32,
        y: f32,
        anchor: Anchor,
        size: f32,
        color: skia::Color,
        mono_numeric: bool,
    ) {
        let p = self.layout(text, size, color, mono_numeric);
        let w = p.longest_line();
        let left = match anchor {
            Anchor::Left => x,
            Anchor::Center => x - w * 0.5,
            Anchor::Right => x - w,
        };
        p.paint(canvas, (left, y - p.height() * 0.5));
    }

    /// Draw `text` centered on `(x, y)`, reading bottom-to-top.
    pub fn draw_vertical(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color) {
        canvas.save();
        canvas.rotate(-90.0, Some(skia::Point::new(x, y)));
        self.draw(canvas, text, x, y, Anchor::Center, size, color, false);
        canvas.restore();
    }
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}
