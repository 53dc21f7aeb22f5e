//! Toroidal wrapping of coordinates and shape footprints
//!
//! A point exceeding one edge reappears measured inward from the opposite
//! edge by the same excess. This is a relocation, not a clamp: the excess is
//! carried across so a drawing that runs off one side visually continues on
//! the other. Wrapping is applied per axis; a footprint straddling a corner
//! yields one ghost per axis, never a combined diagonal ghost.

/// Relocate a point onto the canvas torus
///
/// Canvas coordinates span [-W/2, W/2] x [-H/2, H/2] around the origin.
/// Interior points pass through unchanged. The relocation is applied once
/// per axis; callers keep per-step displacements below one canvas span.
pub const fn wrap_point(point: [i32; 2], dimensions: (i32, i32)) -> [i32; 2] {
    let (width, height) = dimensions;
    let mut x = point[0];
    let mut y = point[1];

    if x > width / 2 {
        x -= width;
    } else if x < -width / 2 {
        x += width;
    }

    if y > height / 2 {
        y -= height;
    } else if y < -height / 2 {
        y += height;
    }

    [x, y]
}

/// Ghost anchors for a shape footprint straddling a canvas edge
///
/// `anchor` is assumed already wrapped. A footprint reaching past the right
/// edge produces a ghost one full canvas width to the left, and symmetrically
/// for the other three edges. Returns zero, one, or two anchors: at most one
/// per axis, independently.
pub fn ghost_anchors(anchor: [i32; 2], size: f64, dimensions: (i32, i32)) -> Vec<[i32; 2]> {
    let (width, height) = dimensions;
    let x = f64::from(anchor[0]);
    let y = f64::from(anchor[1]);
    let half_width = f64::from(width / 2);
    let half_height = f64::from(height / 2);

    let mut ghosts = Vec::with_capacity(2);

    if x + size > half_width {
        ghosts.push([anchor[0] - width, anchor[1]]);
    } else if x - size < -half_width {
        ghosts.push([anchor[0] + width, anchor[1]]);
    }

    if y + size > half_height {
        ghosts.push([anchor[0], anchor[1] - height]);
    } else if y - size < -half_height {
        ghosts.push([anchor[0], anchor[1] + height]);
    }

    ghosts
}
