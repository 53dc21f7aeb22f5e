//! Tests for shape rasterization, including wrapped ghost copies

use camogen::algorithm::placement::{ShapeKind, ShapeSpec};
use camogen::render::canvas::Canvas;
use camogen::render::shapes::render_shape;
use camogen::spatial::ghost_anchors;

const COLOR: [u8; 3] = [200, 10, 10];

fn canvas() -> Canvas {
    Canvas::new(600, 600).unwrap_or_else(|_| unreachable!("dimensions are valid"))
}

fn pixel_at(canvas: &Canvas, x: f64, y: f64) -> [u8; 4] {
    let (px, py) = canvas.to_pixel(x, y);
    canvas
        .image()
        .ok()
        .and_then(|raster| raster.get_pixel_checked(px as u32, py as u32).copied())
        .map_or([0, 0, 0, 0], |pixel| pixel.0)
}

#[test]
fn test_rectangle_fills_its_footprint() {
    let mut surface = canvas();
    let spec = ShapeSpec {
        anchor: [0, 0],
        size: 100.0,
        color: COLOR,
        kind: ShapeKind::Rectangle,
        orientation: 0,
    };
    render_shape(&mut surface, &spec, &[spec.anchor], 2.0)
        .unwrap_or_else(|_| unreachable!("canvas is open"));

    // Interior of the size x size/2 footprint above the anchor
    assert_eq!(pixel_at(&surface, 50.0, 25.0), [200, 10, 10, 0xff]);
    // Outside the footprint stays background
    assert_eq!(pixel_at(&surface, -20.0, 25.0), [0xff, 0xff, 0xff, 0xff]);
}

#[test]
fn test_edge_straddling_rectangle_continues_on_the_opposite_side() {
    let mut surface = canvas();
    let anchor = [280, 0];
    let size = 100.0;
    let spec = ShapeSpec {
        anchor,
        size,
        color: COLOR,
        kind: ShapeKind::Rectangle,
        orientation: 0,
    };

    let ghosts = ghost_anchors(anchor, size, surface.dimensions());
    assert_eq!(ghosts, vec![[-320, 0]]);

    let mut anchors = vec![anchor];
    anchors.extend(ghosts);
    render_shape(&mut surface, &spec, &anchors, 2.0)
        .unwrap_or_else(|_| unreachable!("canvas is open"));

    // Primary copy near the right edge
    assert_eq!(pixel_at(&surface, 290.0, 25.0), [200, 10, 10, 0xff]);
    // Ghost copy re-entering from the left edge
    assert_eq!(pixel_at(&surface, -250.0, 25.0), [200, 10, 10, 0xff]);
}

#[test]
fn test_corner_straddle_produces_one_ghost_per_axis() {
    let surface = canvas();
    let ghosts = ghost_anchors([280, 280], 100.0, surface.dimensions());
    assert_eq!(ghosts, vec![[-320, 280], [280, -320]]);
}

#[test]
fn test_circle_is_filled_above_the_anchor() {
    let mut surface = canvas();
    let spec = ShapeSpec {
        anchor: [0, 0],
        size: 100.0,
        color: COLOR,
        kind: ShapeKind::Circle,
        orientation: 0,
    };
    render_shape(&mut surface, &spec, &[spec.anchor], 2.0)
        .unwrap_or_else(|_| unreachable!("canvas is open"));

    // Center of the circle sits half a diameter above the anchor
    assert_eq!(pixel_at(&surface, 0.0, 50.0), [200, 10, 10, 0xff]);
    assert_eq!(pixel_at(&surface, 0.0, -60.0), [0xff, 0xff, 0xff, 0xff]);
}

#[test]
fn test_thick_line_covers_pixels_off_its_spine() {
    let mut surface = canvas();
    let spec = ShapeSpec {
        anchor: [-50, 0],
        size: 100.0,
        color: COLOR,
        kind: ShapeKind::Line,
        orientation: 0,
    };
    render_shape(&mut surface, &spec, &[spec.anchor], 8.0)
        .unwrap_or_else(|_| unreachable!("canvas is open"));

    assert_eq!(pixel_at(&surface, 0.0, 0.0), [200, 10, 10, 0xff]);
    assert_eq!(pixel_at(&surface, 0.0, 2.0), [200, 10, 10, 0xff]);
    assert_eq!(pixel_at(&surface, 0.0, 20.0), [0xff, 0xff, 0xff, 0xff]);
}

#[test]
fn test_vanishingly_small_shapes_do_not_panic() {
    let mut surface = canvas();
    for kind in ShapeKind::ALL {
        let spec = ShapeSpec {
            anchor: [0, 0],
            size: 0.01,
            color: COLOR,
            kind,
            orientation: 0,
        };
        assert!(render_shape(&mut surface, &spec, &[spec.anchor], 2.0).is_ok());
    }
}

#[test]
fn test_rendering_on_a_closed_canvas_fails() {
    let mut surface = canvas();
    surface.close();
    let spec = ShapeSpec {
        anchor: [0, 0],
        size: 50.0,
        color: COLOR,
        kind: ShapeKind::Circle,
        orientation: 0,
    };
    assert!(matches!(
        render_shape(&mut surface, &spec, &[spec.anchor], 2.0),
        Err(camogen::GeneratorError::SurfaceUnavailable { .. })
    ));
}
