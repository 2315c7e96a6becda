// File: crates/csv-scatter/src/error.rs
// Summary: The single error type every stage of the plot pipeline returns.

use std::path::PathBuf;

use scatter_core::FigureError;

#[derive(Debug, thiserror::Error)]
pub enum PlotError {
    #[error("cannot list directory {}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot open {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV in {}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("column '{column}' not found in {} (columns: {})", .path.display(), .available.join(", "))]
    MissingColumn { path: PathBuf, column: String, available: Vec<String> },

    /// `row` counts data rows from 1, not counting the header.
    #[error("{}: row {row} has {found} fields, header has {expected}", .path.display())]
    TooManyFields { path: PathBuf, row: usize, expected: usize, found: usize },

    #[error("{}: text column '{column}' has a missing value at row {row}", .path.display())]
    MixedColumn { path: PathBuf, column: String, row: usize },

    #[error("{}: column '{column}' is {found} but earlier files put {expected} values on that axis", .path.display())]
    MixedAxis { path: PathBuf, column: String, expected: &'static str, found: &'static str },

    #[error(transparent)]
    Figure(#[from] FigureError),
}
