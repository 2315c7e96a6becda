// File: crates/csv-scatter/tests/pipeline.rs
// Purpose: End-to-end driver behavior: one series per file, column fidelity, naming, all-or-nothing.

mod common;

use csv_scatter::{build_figure, output_file_name, plot_to, PlotError};
use scatter_core::Marker;

#[test]
fn example_scenario() {
    let data = common::example_dir();
    let out_dir = tempfile::tempdir().unwrap();

    let figure = build_figure(data.path(), "t", "v").unwrap();
    assert_eq!(figure.legend().labels(), vec!["a", "b"]);
    assert_eq!(figure.series()[0].points, vec![(0.0, 1.0), (1.0, 2.0)]);
    assert_eq!(figure.series()[1].points, vec![(0.0, 5.0), (1.0, 3.0)]);
    assert!(figure.series().iter().all(|s| s.marker == Marker::Square));
    assert_eq!(figure.x_axis.label, "t");
    assert_eq!(figure.y_axis.label, "v");

    let out = plot_to(data.path(), "t", "v", out_dir.path()).unwrap();
    assert_eq!(out, out_dir.path().join("v.png"));
    let bytes = std::fs::read(&out).unwrap();
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert!(img.width() > 0 && img.height() > 0);
}

#[test]
fn one_series_per_file_and_non_csv_ignored() {
    let data = tempfile::tempdir().unwrap();
    common::write(data.path(), "blocking.csv", "clients,responseTime\n1,10\n2,20\n3,30\n");
    common::write(data.path(), "async.csv", "clients,responseTime\n1,5\n2,6\n");
    common::write(data.path(), "nonblocking.csv", "responseTime,clients\n7,1\n");
    common::write(data.path(), "readme.txt", "clients,responseTime\n100,100\n");

    let figure = build_figure(data.path(), "clients", "responseTime").unwrap();
    assert_eq!(figure.series().len(), 3);
    assert_eq!(figure.legend().labels(), vec!["async", "blocking", "nonblocking"]);
    // column order in the file does not matter, names do
    assert_eq!(figure.series()[2].points, vec![(1.0, 7.0)]);
    assert!(figure.series().iter().all(|s| s.xs().all(|x| x < 100.0)));
}

#[test]
fn output_name_depends_only_on_y() {
    assert_eq!(output_file_name("v"), "v.png");
    assert_eq!(output_file_name("responseTime"), "responseTime.png");

    let data = common::example_dir();
    let out_dir = tempfile::tempdir().unwrap();
    let a = plot_to(data.path(), "t", "v", out_dir.path()).unwrap();
    let b = plot_to(data.path(), "v", "v", out_dir.path()).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.file_name().unwrap(), "v.png");
}

#[test]
fn empty_directory_renders_empty_figure() {
    let data = tempfile::tempdir().unwrap();
    common::write(data.path(), "notes.md", "# nothing to plot\n");
    let out_dir = tempfile::tempdir().unwrap();

    let figure = build_figure(data.path(), "t", "v").unwrap();
    assert!(figure.series().is_empty());
    assert!(figure.legend().is_empty());

    let out = plot_to(data.path(), "t", "v", out_dir.path()).unwrap();
    assert!(out.exists());
}

#[test]
fn missing_column_in_one_file_writes_nothing() {
    let data = common::example_dir();
    common::write(data.path(), "c.csv", "t,w\n0,1\n");
    let out_dir = tempfile::tempdir().unwrap();

    let err = plot_to(data.path(), "t", "v", out_dir.path()).unwrap_err();
    assert!(matches!(err, PlotError::MissingColumn { ref column, .. } if column == "v"));
    assert!(!out_dir.path().join("v.png").exists());
}

#[test]
fn parse_failure_leaves_previous_image_untouched() {
    let data = common::example_dir();
    common::write(data.path(), "broken.csv", "t,v\n0,1,9\n");
    let out_dir = tempfile::tempdir().unwrap();
    let previous = out_dir.path().join("v.png");
    std::fs::write(&previous, b"old image").unwrap();

    let err = plot_to(data.path(), "t", "v", out_dir.path()).unwrap_err();
    assert!(matches!(err, PlotError::TooManyFields { .. }));
    assert_eq!(std::fs::read(&previous).unwrap(), b"old image");
}

#[test]
fn csv_named_directory_fails_the_run() {
    let data = common::example_dir();
    std::fs::create_dir(data.path().join("c.csv")).unwrap();
    let out_dir = tempfile::tempdir().unwrap();

    let err = plot_to(data.path(), "t", "v", out_dir.path()).unwrap_err();
    assert!(matches!(err, PlotError::Open { .. } | PlotError::Csv { .. }), "unexpected error: {err}");
    assert!(err.to_string().contains("c.csv"));
    assert!(!out_dir.path().join("v.png").exists());
}

#[test]
fn text_x_column_becomes_category_axis() {
    let data = tempfile::tempdir().unwrap();
    common::write(data.path(), "a.csv", "server,v\nblocking,1\nasync,2\n");
    common::write(data.path(), "b.csv", "server,v\nnonblocking,4\nblocking,3\n");

    let figure = build_figure(data.path(), "server", "v").unwrap();
    assert_eq!(figure.x_axis.categories, vec!["blocking", "async", "nonblocking"]);
    assert_eq!(figure.series()[0].points, vec![(0.0, 1.0), (1.0, 2.0)]);
    assert_eq!(figure.series()[1].points, vec![(2.0, 4.0), (0.0, 3.0)]);
    assert!(!figure.y_axis.is_categorical());
    assert!(figure.x_axis.min < 0.0 && figure.x_axis.max > 2.0);

    let out_dir = tempfile::tempdir().unwrap();
    assert!(plot_to(data.path(), "server", "v", out_dir.path()).unwrap().exists());
}

#[test]
fn text_and_numbers_on_one_axis_fail() {
    let data = tempfile::tempdir().unwrap();
    common::write(data.path(), "a.csv", "t,v\n0,1\n");
    common::write(data.path(), "b.csv", "t,v\nfast,2\n");
    let out_dir = tempfile::tempdir().unwrap();

    let err = plot_to(data.path(), "t", "v", out_dir.path()).unwrap_err();
    match err {
        PlotError::MixedAxis { column, expected, found, .. } => {
            assert_eq!((column.as_str(), expected, found), ("t", "numeric", "text"));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(!out_dir.path().join("v.png").exists());
}

#[test]
fn empty_file_fits_a_category_axis() {
    let data = tempfile::tempdir().unwrap();
    common::write(data.path(), "a.csv", "t,v\n");
    common::write(data.path(), "b.csv", "t,v\nfast,2\n");

    let figure = build_figure(data.path(), "t", "v").unwrap();
    assert_eq!(figure.x_axis.categories, vec!["fast"]);
    assert_eq!(figure.series()[1].points, vec![(0.0, 2.0)]);
}

#[test]
fn unreadable_directory_fails() {
    let base = tempfile::tempdir().unwrap();
    let out_dir = tempfile::tempdir().unwrap();
    let err = plot_to(base.path().join("missing"), "t", "v", out_dir.path()).unwrap_err();
    assert!(matches!(err, PlotError::ReadDir { .. }));
    assert!(!out_dir.path().join("v.png").exists());
}

#[test]
fn repeated_builds_are_independent() {
    let data = common::example_dir();
    let first = build_figure(data.path(), "t", "v").unwrap();
    let second = build_figure(data.path(), "t", "v").unwrap();
    assert_eq!(first.series().len(), 2);
    assert_eq!(second.series().len(), 2);
}
