//! Toroidal boundary topology for the drawing canvas

/// Point relocation and ghost anchor computation at canvas edges
pub mod wrap;

pub use wrap::{ghost_anchors, wrap_point};
