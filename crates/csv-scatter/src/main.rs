// File: crates/csv-scatter/src/main.rs
// Summary: CLI entry point; `csv-scatter <DIRECTORY> <X_AXIS> <Y_AXIS>` writes `<Y_AXIS>.png`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

/// Scatter-plot two columns of every `.csv` file in a directory, one series per file.
#[derive(Debug, Parser)]
#[command(name = "csv-scatter", version, about)]
struct Args {
    /// Directory holding the `.csv` files.
    directory: PathBuf,
    /// Column plotted on the x-axis.
    x_axis: String,
    /// Column plotted on the y-axis; the image is saved as `<Y_AXIS>.png`.
    y_axis: String,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    csv_scatter::plot(&args.directory, &args.x_axis, &args.y_axis).with_context(|| {
        format!("failed to plot '{}' against '{}' from {}", args.y_axis, args.x_axis, args.directory.display())
    })?;
    Ok(())
}
