//! Tests for PNG export of the canvas

use camogen::io::image::export_canvas_as_png;
use camogen::render::canvas::Canvas;

#[test]
fn test_export_creates_missing_parent_directories() {
    let dir = tempfile::tempdir().unwrap_or_else(|_| unreachable!("tempdir is writable"));
    let path = dir.path().join("nested").join("out").join("pattern.png");

    let mut canvas = Canvas::new(64, 48).unwrap_or_else(|_| unreachable!("dimensions are valid"));
    canvas
        .set_background([5, 6, 7])
        .unwrap_or_else(|_| unreachable!("canvas is open"));

    export_canvas_as_png(&canvas, &path).unwrap_or_else(|_| unreachable!("tempdir is writable"));

    let reloaded = image::open(&path)
        .unwrap_or_else(|_| unreachable!("export just succeeded"))
        .to_rgba8();
    assert_eq!(reloaded.dimensions(), (64, 48));
    assert!(reloaded.pixels().all(|pixel| pixel.0 == [5, 6, 7, 0xff]));
}

#[test]
fn test_export_of_a_closed_canvas_fails_without_writing() {
    let dir = tempfile::tempdir().unwrap_or_else(|_| unreachable!("tempdir is writable"));
    let path = dir.path().join("pattern.png");

    let mut canvas = Canvas::new(10, 10).unwrap_or_else(|_| unreachable!("dimensions are valid"));
    canvas.close();

    assert!(matches!(
        export_canvas_as_png(&canvas, &path),
        Err(camogen::GeneratorError::SurfaceUnavailable { .. })
    ));
    assert!(!path.exists());
}

#[test]
fn test_unwritable_target_surfaces_an_export_error() {
    let dir = tempfile::tempdir().unwrap_or_else(|_| unreachable!("tempdir is writable"));

    let canvas = Canvas::new(10, 10).unwrap_or_else(|_| unreachable!("dimensions are valid"));

    // The tempdir itself is a directory, not a writable file target
    let result = export_canvas_as_png(&canvas, dir.path());
    assert!(result.is_err());

    // The canvas stays intact for a retry
    assert!(!canvas.is_closed());
    let retry = dir.path().join("pattern.png");
    assert!(export_canvas_as_png(&canvas, &retry).is_ok());
}
