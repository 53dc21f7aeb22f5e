//! Rasterization of shape specifications onto the canvas
//!
//! One routine covers both the primary render and any wrapped ghost copies:
//! the caller passes the full anchor list and every anchor receives an
//! identical shape. Closed shapes are filled; lines are stroked at the
//! configured thickness.

use crate::algorithm::placement::{ShapeKind, ShapeSpec};
use crate::io::error::Result;
use crate::render::canvas::{Canvas, Color, to_rgba};
use imageproc::drawing::{
    draw_filled_circle_mut, draw_filled_rect_mut, draw_line_segment_mut, draw_polygon_mut,
};
use imageproc::point::Point;
use imageproc::rect::Rect;

/// Render one shape at every anchor in the list
///
/// The first anchor is the primary position; the rest are ghost positions
/// produced by boundary wrapping. All copies share kind, color, size, and
/// orientation. `thickness` is the stroke width for line shapes and has no
/// effect on filled shapes.
///
/// # Errors
///
/// Returns `SurfaceUnavailable` if the canvas buffer has been torn down.
pub fn render_shape(
    canvas: &mut Canvas,
    spec: &ShapeSpec,
    anchors: &[[i32; 2]],
    thickness: f64,
) -> Result<()> {
    for anchor in anchors {
        match spec.kind {
            ShapeKind::Rectangle => rectangle(canvas, *anchor, spec.size, spec.color)?,
            ShapeKind::Circle => circle(canvas, *anchor, spec.size, spec.color)?,
            ShapeKind::Triangle => {
                triangle(canvas, *anchor, spec.size, spec.orientation, spec.color)?;
            }
            ShapeKind::Line => {
                line(canvas, *anchor, spec.size, spec.orientation, thickness, spec.color)?;
            }
        }
    }
    Ok(())
}

// Unit direction for a heading in degrees, y up
fn unit(degrees: i32) -> (f64, f64) {
    let radians = f64::from(degrees).to_radians();
    (radians.cos(), radians.sin())
}

fn to_point(canvas: &Canvas, x: f64, y: f64) -> Point<i32> {
    let (px, py) = canvas.to_pixel(x, y);
    Point::new(px.round() as i32, py.round() as i32)
}

// Duplicate or collinear vertices cannot be handed to the polygon filler
fn is_degenerate(points: &[Point<i32>; 3]) -> bool {
    let [p0, p1, p2] = points;
    if p0 == p1 || p1 == p2 || p0 == p2 {
        return true;
    }
    let area = (p1.x - p0.x) * (p2.y - p0.y) - (p2.x - p0.x) * (p1.y - p0.y);
    area == 0
}

// Axis-aligned size x size/2 rectangle with the anchor at its lower-left corner
fn rectangle(canvas: &mut Canvas, anchor: [i32; 2], size: f64, color: Color) -> Result<()> {
    let x = f64::from(anchor[0]);
    let y = f64::from(anchor[1]);
    let (left, top) = canvas.to_pixel(x, y + size / 2.0);
    let width = (size.round() as i64).max(1) as u32;
    let height = ((size / 2.0).round() as i64).max(1) as u32;

    let rect = Rect::at(left.round() as i32, top.round() as i32).of_size(width, height);
    draw_filled_rect_mut(canvas.image_mut()?, rect, to_rgba(color));
    Ok(())
}

// Filled circle of diameter `size`, centered size/2 above the anchor
fn circle(canvas: &mut Canvas, anchor: [i32; 2], size: f64, color: Color) -> Result<()> {
    let x = f64::from(anchor[0]);
    let y = f64::from(anchor[1]);
    let radius = size / 2.0;
    let (cx, cy) = canvas.to_pixel(x, y + radius);

    draw_filled_circle_mut(
        canvas.image_mut()?,
        (cx.round() as i32, cy.round() as i32),
        (radius.round() as i32).max(0),
        to_rgba(color),
    );
    Ok(())
}

// Filled equilateral triangle of side `size`, first vertex at the anchor,
// walked counterclockwise from the given heading
fn triangle(
    canvas: &mut Canvas,
    anchor: [i32; 2],
    size: f64,
    orientation: i32,
    color: Color,
) -> Result<()> {
    let x = f64::from(anchor[0]);
    let y = f64::from(anchor[1]);
    let (dx0, dy0) = unit(orientation);
    let (dx1, dy1) = unit(orientation + 120);

    let v1 = (x + size * dx0, y + size * dy0);
    let v2 = (v1.0 + size * dx1, v1.1 + size * dy1);

    let points = [
        to_point(canvas, x, y),
        to_point(canvas, v1.0, v1.1),
        to_point(canvas, v2.0, v2.1),
    ];
    if is_degenerate(&points) {
        return Ok(());
    }

    draw_polygon_mut(canvas.image_mut()?, &points, to_rgba(color));
    Ok(())
}

// Straight segment of length `size` from the anchor, stroked as a filled
// quad when the thickness exceeds a single pixel
fn line(
    canvas: &mut Canvas,
    anchor: [i32; 2],
    size: f64,
    orientation: i32,
    thickness: f64,
    color: Color,
) -> Result<()> {
    let x = f64::from(anchor[0]);
    let y = f64::from(anchor[1]);
    let (dx, dy) = unit(orientation);
    let end = (x + size * dx, y + size * dy);

    if thickness > 1.0 {
        let half = thickness / 2.0;
        let (nx, ny) = (-dy * half, dx * half);
        let quad = [
            to_point(canvas, x + nx, y + ny),
            to_point(canvas, end.0 + nx, end.1 + ny),
            to_point(canvas, end.0 - nx, end.1 - ny),
            to_point(canvas, x - nx, y - ny),
        ];
        let distinct = quad
            .iter()
            .zip(quad.iter().cycle().skip(1))
            .all(|(a, b)| a != b);
        if distinct {
            draw_polygon_mut(canvas.image_mut()?, &quad, to_rgba(color));
            return Ok(());
        }
    }

    let (sx, sy) = canvas.to_pixel(x, y);
    let (ex, ey) = canvas.to_pixel(end.0, end.1);
    draw_line_segment_mut(
        canvas.image_mut()?,
        (sx as f32, sy as f32),
        (ex as f32, ey as f32),
        to_rgba(color),
    );
    Ok(())
}
