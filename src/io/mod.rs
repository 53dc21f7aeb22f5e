//! Input/output operations and error handling

/// Command-line interface for the pattern generation tool
pub mod cli;
/// Policy constants and runtime configuration defaults
pub mod configuration;
/// Error types for generator operations
pub mod error;
/// PNG export of the finished canvas
pub mod image;
