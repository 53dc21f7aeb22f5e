//! Drawing surface management and shape rasterization

/// Centered-coordinate drawing surface over a raster buffer
pub mod canvas;
/// Rasterization of shape specifications onto the canvas
pub mod shapes;

pub use canvas::{Canvas, Color};
