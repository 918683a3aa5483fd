//! Synthesis constants and runtime configuration defaults

use std::ops::RangeInclusive;

// Canvas defaults match the square format the images are posted in
/// Default canvas width in pixels
pub const DEFAULT_WIDTH: usize = 1080;
/// Default canvas height in pixels
pub const DEFAULT_HEIGHT: usize = 1080;
/// Channel count of every synthesized pixel buffer
pub const OUTPUT_CHANNELS: usize = 3;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed canvas dimension
pub const MAX_CANVAS_DIMENSION: usize = 10_000;

/// Range from which the minimum leaf depth is drawn
pub const DEFAULT_DEPTH_MIN_RANGE: RangeInclusive<usize> = 2..=10;
/// Range from which the maximum non-leaf depth is drawn
pub const DEFAULT_DEPTH_MAX_RANGE: RangeInclusive<usize> = 10..=30;

// Bounds recursion depth of both building and evaluation
/// Largest depth threshold a configuration may request
pub const MAX_TREE_DEPTH: usize = 64;

/// Clamp applied to denominators by safe division
pub const DEFAULT_EPSILON: f64 = 0.001;

/// Default cap on the number of nodes in one expression tree
pub const DEFAULT_NODE_BUDGET: usize = 100_000;
/// Hard ceiling for any configured node budget
pub const MAX_NODE_BUDGET: usize = 10_000_000;

// Output settings
/// Length of randomly generated file names
pub const FILENAME_LENGTH: usize = 16;
/// JPEG encoder quality
pub const JPEG_QUALITY: u8 = 95;
/// Root directory for generated images
pub const DEFAULT_OUTPUT_DIR: &str = "masterpieces";
/// File name prefix used by sequential naming
pub const DEFAULT_SEQUENTIAL_PREFIX: &str = "magnet";
/// Number of images generated per invocation
pub const DEFAULT_IMAGE_COUNT: usize = 1;

/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
