// File: crates/scatter-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

use crate::types::Insets;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    /// Plot area of a `width` x `height` surface after removing `insets`.
    pub fn inset(width: i32, height: i32, insets: &Insets) -> Self {
        let left = insets.left as i32;
        let top = insets.top as i32;
        // never let the plot area collapse below a pixel
        let right = (width - insets.right as i32).max(left + 1);
        let bottom = (height - insets.bottom as i32).max(top + 1);
        Self { left, top, right, bottom }
    }

    pub fn center_x(&self) -> f32 { (self.left + self.right) as f32 * 0.5 }
    pub fn center_y(&self) -> f32 { (self.top + self.bottom) as f32 * 0.5 }
}
