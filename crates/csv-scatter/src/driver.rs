// File: crates/csv-scatter/src/driver.rs
// Summary: discover -> load -> extract -> accumulate -> render -> persist.

use std::path::{Path, PathBuf};

use scatter_core::{Axis, Figure, Marker, RenderOptions, Series};

use crate::discover::{candidate_files, stem};
use crate::table::{ColumnValues, Table};
use crate::PlotError;

/// Name of the image written for a given y-axis column.
pub fn output_file_name(y_axis: &str) -> String {
    format!("{y_axis}.png")
}

/// Load one file and turn its two columns into a square-marker series labeled by the file stem.
///
/// Text columns are placed on `figure`'s matching axis as categories. A column
/// that is text here but numeric in an earlier series, or the reverse, is an error.
pub fn load_series(path: &Path, x_axis: &str, y_axis: &str, figure: &mut Figure) -> Result<Series, PlotError> {
    let table = Table::from_path(path)?;
    let xs = table.values(x_axis)?;
    let ys = table.values(y_axis)?;
    let has_points = figure.series().iter().any(|s| !s.is_empty());
    check_axis(&figure.x_axis, has_points, &xs, path, x_axis)?;
    check_axis(&figure.y_axis, has_points, &ys, path, y_axis)?;
    log::info!("loaded {} rows from {}", table.len(), path.display());

    let xs = positions(xs, &mut figure.x_axis);
    let ys = positions(ys, &mut figure.y_axis);
    Ok(Series::from_columns(stem(path), xs, ys)?.with_marker(Marker::Square))
}

fn positions(values: ColumnValues, axis: &mut Axis) -> Vec<f64> {
    match values {
        ColumnValues::Numeric(v) => v,
        ColumnValues::Text(v) => v.iter().map(|s| axis.category_position(s)).collect(),
    }
}

/// Only text columns add categories, so an axis already holding points is
/// numeric exactly when it has none. Empty columns fit either kind.
fn check_axis(axis: &Axis, has_points: bool, values: &ColumnValues, path: &Path, column: &str) -> Result<(), PlotError> {
    let (expected, found) = match values {
        ColumnValues::Numeric(v) if !v.is_empty() && axis.is_categorical() => ("text", "numeric"),
        ColumnValues::Text(v) if !v.is_empty() && has_points && !axis.is_categorical() => ("numeric", "text"),
        _ => return Ok(()),
    };
    Err(PlotError::MixedAxis { path: path.to_path_buf(), column: column.to_string(), expected, found })
}

/// Build the figure for every `.csv` file in `dir` without writing anything.
///
/// The first file that fails to load aborts the whole build.
pub fn build_figure(dir: impl AsRef<Path>, x_axis: &str, y_axis: &str) -> Result<Figure, PlotError> {
    let dir = dir.as_ref();
    let files = candidate_files(dir)?;
    log::info!("found {} csv file(s) in {}", files.len(), dir.display());

    let mut figure = Figure::new();
    for path in &files {
        let series = load_series(path, x_axis, y_axis, &mut figure)?;
        figure.add_series(series);
    }
    figure.set_x_label(x_axis);
    figure.set_y_label(y_axis);
    figure.autoscale_axes();
    Ok(figure)
}

/// Plot `y_axis` against `x_axis` for every file in `dir`, writing `<y_axis>.png` into `out_dir`.
pub fn plot_to(dir: impl AsRef<Path>, x_axis: &str, y_axis: &str, out_dir: impl AsRef<Path>) -> Result<PathBuf, PlotError> {
    let out = out_dir.as_ref().join(output_file_name(y_axis));
    let figure = build_figure(dir, x_axis, y_axis)?;
    write_figure(&figure, out)
}

/// Same as [`plot_to`] with the current working directory as destination.
pub fn plot(dir: impl AsRef<Path>, x_axis: &str, y_axis: &str) -> Result<PathBuf, PlotError> {
    let out = PathBuf::from(output_file_name(y_axis));
    let figure = build_figure(dir, x_axis, y_axis)?;
    write_figure(&figure, out)
}

fn write_figure(figure: &Figure, out: PathBuf) -> Result<PathBuf, PlotError> {
    figure.render_to_png(&RenderOptions::default(), &out)?;
    log::info!("wrote {} ({} series)", out.display(), figure.series().len());
    Ok(out)
}
