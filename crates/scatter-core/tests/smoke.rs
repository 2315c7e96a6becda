// File: crates/scatter-core/tests/smoke.rs
// Purpose: End-to-end render smoke tests writing PNGs.

use scatter_core::{Figure, RenderOptions, Series};

#[test]
fn render_smoke_png() {
    let mut figure = Figure::new();
    figure.add_series(Series::new("a", vec![(0.0, 1.0), (1.0, 2.0)]));
    figure.add_series(Series::new("b", vec![(0.0, 5.0), (1.0, 3.0)]));
    figure.set_x_label("t");
    figure.set_y_label("v");
    figure.autoscale_axes();

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("v.png");
    figure.render_to_png(&RenderOptions::default(), &out).expect("render should succeed");

    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    let bytes = figure.render_to_png_bytes(&RenderOptions::default()).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn empty_figure_still_renders() {
    let mut figure = Figure::new();
    figure.set_x_label("clients");
    figure.set_y_label("responseTime");
    figure.autoscale_axes();

    assert!(figure.legend().is_empty());
    let bytes = figure.render_to_png_bytes(&RenderOptions::default()).expect("render bytes");
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!((img.width(), img.height()), (1024, 640));
}

#[test]
fn write_failure_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("missing-dir").join("v.png");
    let err = Figure::new().render_to_png(&RenderOptions::default(), &out).unwrap_err();
    assert!(matches!(err, scatter_core::FigureError::Write { .. }));
    assert!(err.to_string().contains("missing-dir"));
}

#[test]
fn rewrite_replaces_previous_image_without_leftovers() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("v.png");
    std::fs::write(&out, b"old image").unwrap();

    let mut figure = Figure::new();
    figure.add_series(Series::new("a", vec![(0.0, 1.0)]));
    figure.autoscale_axes();
    figure.render_to_png(&RenderOptions::default(), &out).unwrap();

    assert!(std::fs::read(&out).unwrap().starts_with(&[137, 80, 78, 71]));
    let names: Vec<_> = std::fs::read_dir(dir.path()).unwrap().map(|e| e.unwrap().file_name()).collect();
    assert_eq!(names, vec![std::ffi::OsString::from("v.png")]);
}

#[test]
fn failed_rename_keeps_target_and_cleans_up() {
    let dir = tempfile::tempdir().unwrap();
    // a directory in the way makes the final rename fail after the bytes were written
    let blocker = dir.path().join("v.png");
    std::fs::create_dir(&blocker).unwrap();
    std::fs::write(blocker.join("keep.txt"), b"still here").unwrap();

    let err = Figure::new().render_to_png(&RenderOptions::default(), &blocker).unwrap_err();
    assert!(matches!(err, scatter_core::FigureError::Write { .. }));
    assert_eq!(std::fs::read(blocker.join("keep.txt")).unwrap(), b"still here");
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
}
