//! Recursive placement of shrinking random shapes
//!
//! Each placement run is a depth-bounded random walk: draw a shape at the
//! wrapped anchor (plus any ghost copies across canvas edges), then step to
//! a nearby offset with a smaller size and a fresh color. Exactly one child
//! per step, so the walk is implemented as a plain loop over the depth
//! budget with identical draw ordering to the recursive formulation.

use crate::algorithm::palette::ActivePalette;
use crate::io::configuration::{CHILD_OFFSET_RANGE, SHRINK_FACTOR};
use crate::io::error::Result;
use crate::render::canvas::{Canvas, Color};
use crate::render::shapes::render_shape;
use crate::spatial::{ghost_anchors, wrap_point};
use rand::Rng;
use rand::seq::IndexedRandom;

/// Shape primitives available to the placement engine
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    /// Axis-aligned filled rectangle, size x size/2
    Rectangle,
    /// Filled circle of diameter size
    Circle,
    /// Filled equilateral triangle of side size
    Triangle,
    /// Unfilled straight segment of length size
    Line,
}

impl ShapeKind {
    /// All placeable shape kinds, in selection order
    pub const ALL: [Self; 4] = [Self::Rectangle, Self::Circle, Self::Triangle, Self::Line];

    /// Draw a uniform random shape kind
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::ALL.choose(rng).copied().unwrap_or(Self::Rectangle)
    }

    /// Draw the random orientation for this kind, in degrees
    ///
    /// Only triangles and lines are oriented; the other kinds consume no
    /// random draw and render axis-aligned.
    pub fn random_orientation<R: Rng>(self, rng: &mut R) -> i32 {
        const TRIANGLE_HEADINGS: [i32; 4] = [0, 90, 180, 270];
        const LINE_HEADINGS: [i32; 4] = [0, 90, 45, -45];

        match self {
            Self::Rectangle | Self::Circle => 0,
            Self::Triangle => TRIANGLE_HEADINGS.choose(rng).copied().unwrap_or(0),
            Self::Line => LINE_HEADINGS.choose(rng).copied().unwrap_or(0),
        }
    }
}

/// One rendered shape: everything the renderer needs, nothing retained after
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeSpec {
    /// Wrapped anchor position on the canvas
    pub anchor: [i32; 2],
    /// Characteristic size of the shape
    pub size: f64,
    /// Fill or stroke color
    pub color: Color,
    /// Which primitive to draw
    pub kind: ShapeKind,
    /// Heading in degrees, meaningful for triangles and lines only
    pub orientation: i32,
}

/// Walk one chain of shrinking shapes, rendering each step
///
/// Performs exactly `depth` primary renders (ghost copies excluded) before
/// returning; a zero depth renders nothing. Each step wraps the anchor onto
/// the torus, renders the shape and its ghosts, then offsets the anchor by
/// uniform integers in the child offset range, shrinks the size, and draws
/// the next color from the palette. Returns the ordered specifications of
/// the primary renders.
///
/// # Errors
///
/// Returns `SurfaceUnavailable` if the canvas is torn down mid-walk; the
/// walk aborts immediately.
pub fn place_recursive<R: Rng>(
    canvas: &mut Canvas,
    start: [i32; 2],
    initial_size: f64,
    initial_color: Color,
    depth: u32,
    palette: &ActivePalette,
    thickness: f64,
    rng: &mut R,
) -> Result<Vec<ShapeSpec>> {
    let dimensions = canvas.dimensions();
    let mut trace = Vec::with_capacity(depth as usize);

    let mut anchor = start;
    let mut size = initial_size;
    let mut color = initial_color;

    for _ in 0..depth {
        let wrapped = wrap_point(anchor, dimensions);
        let kind = ShapeKind::random(rng);
        let orientation = kind.random_orientation(rng);
        let spec = ShapeSpec {
            anchor: wrapped,
            size,
            color,
            kind,
            orientation,
        };

        let mut anchors = vec![wrapped];
        anchors.extend(ghost_anchors(wrapped, size, dimensions));
        render_shape(canvas, &spec, &anchors, thickness)?;
        trace.push(spec);

        // The offset and color draws are consumed even on the final step
        anchor = [
            wrapped[0] + rng.random_range(-CHILD_OFFSET_RANGE..=CHILD_OFFSET_RANGE),
            wrapped[1] + rng.random_range(-CHILD_OFFSET_RANGE..=CHILD_OFFSET_RANGE),
        ];
        size *= SHRINK_FACTOR;
        color = palette.pick_draw_color(rng);
    }

    Ok(trace)
}
