//! Core pattern generation algorithm

/// Main driver orchestrating generation runs
pub mod executor;
/// Background and drawing color selection from a fixed catalogue
pub mod palette;
/// Recursive placement of shrinking random shapes
pub mod placement;

pub use executor::{GenerationConfig, PatternGenerator};
