//! Input/output operations, configuration and error handling

/// Command-line interface and batch orchestration
pub mod cli;
/// Synthesis constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// Image encoding and export
pub mod image;
/// Logging setup
pub mod logging;
/// Output path naming
pub mod naming;
/// Batch progress display
pub mod progress;
