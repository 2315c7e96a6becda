// File: crates/csv-scatter/src/lib.rs
// Summary: Scatter two named columns from every CSV file in a directory into one labeled PNG.

pub mod discover;
pub mod driver;
pub mod error;
pub mod table;

pub use driver::{build_figure, load_series, output_file_name, plot, plot_to};
pub use error::PlotError;
pub use table::{ColumnValues, Table};
