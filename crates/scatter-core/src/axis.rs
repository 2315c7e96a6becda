// File: crates/scatter-core/src/axis.rs
// Summary: Axis model with label, visible range, and optional text categories.

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    /// Text values in first-seen order; category `i` sits at position `i`.
    /// Empty for a numeric axis.
    pub categories: Vec<String>,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, categories: Vec::new() }
    }

    pub fn is_categorical(&self) -> bool { !self.categories.is_empty() }

    /// Position of `value` on this axis, registering it as a new category if unseen.
    pub fn category_position(&mut self, value: &str) -> f64 {
        let idx = match self.categories.iter().position(|c| c == value) {
            Some(idx) => idx,
            None => {
                self.categories.push(value.to_string());
                self.categories.len() - 1
            }
        };
        idx as f64
    }
}

impl Default for Axis {
    fn default() -> Self { Self::new("", 0.0, 1.0) }
}
