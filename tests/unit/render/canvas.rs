//! Tests for the centered-coordinate drawing surface

use camogen::render::canvas::{Canvas, INITIAL_BACKGROUND};

#[test]
fn test_new_canvas_is_white_and_open() {
    let canvas = Canvas::new(600, 600).unwrap_or_else(|_| unreachable!("dimensions are valid"));
    assert_eq!(canvas.dimensions(), (600, 600));
    assert_eq!(canvas.background(), INITIAL_BACKGROUND);
    assert!(!canvas.is_closed());

    let raster = canvas.image().unwrap_or_else(|_| unreachable!("canvas is open"));
    assert!(raster.pixels().all(|pixel| pixel.0 == [0xff, 0xff, 0xff, 0xff]));
}

#[test]
fn test_non_positive_dimensions_are_rejected() {
    assert!(matches!(
        Canvas::new(0, 600),
        Err(camogen::GeneratorError::InvalidParameter { parameter, .. })
            if parameter == "width"
    ));
    assert!(matches!(
        Canvas::new(600, -10),
        Err(camogen::GeneratorError::InvalidParameter { parameter, .. })
            if parameter == "height"
    ));
}

#[test]
fn test_set_background_fills_every_pixel() {
    let mut canvas = Canvas::new(32, 16).unwrap_or_else(|_| unreachable!("dimensions are valid"));
    canvas
        .set_background([10, 20, 30])
        .unwrap_or_else(|_| unreachable!("canvas is open"));

    assert_eq!(canvas.background(), [10, 20, 30]);
    let raster = canvas.image().unwrap_or_else(|_| unreachable!("canvas is open"));
    assert!(raster.pixels().all(|pixel| pixel.0 == [10, 20, 30, 0xff]));
}

#[test]
fn test_clear_restores_the_current_background() {
    let mut canvas = Canvas::new(20, 20).unwrap_or_else(|_| unreachable!("dimensions are valid"));
    canvas
        .set_background([1, 2, 3])
        .unwrap_or_else(|_| unreachable!("canvas is open"));

    if let Ok(raster) = canvas.image_mut()
        && let Some(pixel) = raster.get_pixel_mut_checked(5, 5)
    {
        pixel.0 = [200, 200, 200, 0xff];
    }

    canvas.clear().unwrap_or_else(|_| unreachable!("canvas is open"));
    let raster = canvas.image().unwrap_or_else(|_| unreachable!("canvas is open"));
    assert!(raster.pixels().all(|pixel| pixel.0 == [1, 2, 3, 0xff]));
}

#[test]
fn test_closed_canvas_reports_surface_unavailable() {
    let mut canvas = Canvas::new(10, 10).unwrap_or_else(|_| unreachable!("dimensions are valid"));
    canvas.close();

    assert!(canvas.is_closed());
    assert!(matches!(
        canvas.image(),
        Err(camogen::GeneratorError::SurfaceUnavailable { .. })
    ));
    assert!(matches!(
        canvas.clear(),
        Err(camogen::GeneratorError::SurfaceUnavailable { .. })
    ));
}

#[test]
fn test_pixel_mapping_centers_the_origin() {
    let canvas = Canvas::new(600, 400).unwrap_or_else(|_| unreachable!("dimensions are valid"));

    let (px, py) = canvas.to_pixel(0.0, 0.0);
    assert!((px - 300.0).abs() < f64::EPSILON);
    assert!((py - 200.0).abs() < f64::EPSILON);

    // y up in logical space maps to y down in raster space
    let (px, py) = canvas.to_pixel(-300.0, 200.0);
    assert!(px.abs() < f64::EPSILON);
    assert!(py.abs() < f64::EPSILON);
}
