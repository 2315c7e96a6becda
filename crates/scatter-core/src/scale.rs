// File: crates/scatter-core/src/scale.rs
// Summary: Linear data-to-pixel transform for one axis.

/// Maps the data range `[min, max]` onto the pixel range `[px_start, px_end]`.
///
/// For a vertical axis pass the bottom edge as `px_start` so larger values
/// land higher on screen.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub px_start: f32,
    pub px_end: f32,
    pub min: f64,
    pub max: f64,
}

impl LinearScale {
    pub fn new(px_start: f32, px_end: f32, min: f64, mut max: f64) -> Self {
        if (max - min).abs() < 1e-12 { max = min + 1.0; }
        Self { px_start, px_end, min, max }
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let frac = (v - self.min) / (self.max - self.min);
        self.px_start + frac as f32 * (self.px_end - self.px_start)
    }

    #[inline]
    pub fn from_px(&self, px: f32) -> f64 {
        let frac = ((px - self.px_start) / (self.px_end - self.px_start)) as f64;
        self.min + frac * (self.max - self.min)
    }

    /// True when `px` lies between the two ends, in either orientation.
    pub fn contains_px(&self, px: f32) -> bool {
        let (lo, hi) = if self.px_start <= self.px_end {
            (self.px_start, self.px_end)
        } else {
            (self.px_end, self.px_start)
        };
        px >= lo - 0.5 && px <= hi + 0.5
    }
}
