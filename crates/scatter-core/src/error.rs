// File: crates/scatter-core/src/error.rs
// Summary: Error type for figure assembly and rendering.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum FigureError {
    /// Both columns of a series must come from the same rows.
    #[error("series '{label}' has {x_len} x-values but {y_len} y-values")]
    LengthMismatch { label: String, x_len: usize, y_len: usize },

    #[error("failed to create a {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },

    #[error("failed to encode figure as PNG")]
    Encode,

    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
