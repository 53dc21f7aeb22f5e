//! Recursive shape-placement algorithm for camouflage-style pattern generation
//!
//! The system seeds a random source once per run, picks a background and a
//! disjoint set of drawing colors from a fixed catalogue, then repeatedly
//! walks a chain of shrinking random shapes across a toroidally-wrapped
//! canvas. Shapes straddling a canvas edge reappear on the opposite side.

#![forbid(unsafe_code)]

/// Core algorithm implementation including palette selection, recursive placement, and the pattern driver
pub mod algorithm;
/// Input/output operations, CLI, and error handling
pub mod io;
/// Drawing surface management and shape rasterization
pub mod render;
/// Toroidal boundary wrapping utilities
pub mod spatial;

pub use io::error::{GeneratorError, Result};
