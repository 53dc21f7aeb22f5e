//! Policy constants and runtime configuration defaults

use crate::render::canvas::Color;

// Canvas dimensions in logical units, centered on the origin
/// Default canvas width
pub const DEFAULT_CANVAS_WIDTH: i32 = 600;
/// Default canvas height
pub const DEFAULT_CANVAS_HEIGHT: i32 = 600;

// Placement policy constants
/// Scale factor applied to each child shape in a placement chain
pub const SHRINK_FACTOR: f64 = 0.7;
/// Maximum per-axis offset between a shape and its child
pub const CHILD_OFFSET_RANGE: i32 = 100;
/// Smallest initial shape size drawn by the pattern driver
pub const MIN_INITIAL_SIZE: i32 = 50;
/// Largest initial shape size drawn by the pattern driver
pub const MAX_INITIAL_SIZE: i32 = 150;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: i64 = 42;
/// Default number of drawing colors sampled from the catalogue
pub const DEFAULT_COLOR_COUNT: usize = 5;
/// Default number of independent placement chains per run
pub const DEFAULT_LOOP_COUNT: usize = 30;
/// Default depth budget for each placement chain
pub const DEFAULT_RECURSION_DEPTH: u32 = 3;
/// Default stroke width for line shapes
pub const DEFAULT_LINE_THICKNESS: f64 = 2.0;

/// Color catalogue resembling urban environments (greys, blues, greens, beiges)
pub const URBAN_PALETTE: [Color; 10] = [
    [0x70, 0x80, 0x90],
    [0x2f, 0x4f, 0x4f],
    [0xd3, 0xd3, 0xd3],
    [0x46, 0x82, 0xb4],
    [0x77, 0x88, 0x99],
    [0xa9, 0xa9, 0xa9],
    [0x69, 0x69, 0x69],
    [0xbd, 0xb7, 0x6b],
    [0x8b, 0x45, 0x13],
    [0x55, 0x6b, 0x2f],
];

/// Neon-inspired color catalogue
pub const NEON_PALETTE: [Color; 10] = [
    [0xff, 0x00, 0xff],
    [0x00, 0xff, 0xff],
    [0xff, 0x45, 0x00],
    [0x32, 0xcd, 0x32],
    [0xff, 0x14, 0x93],
    [0x00, 0xff, 0x00],
    [0xff, 0x63, 0x47],
    [0x8a, 0x2b, 0xe2],
    [0xff, 0xb6, 0xc1],
    [0x00, 0xfa, 0x9a],
];
