//! Procedural image synthesis from random expression trees
//!
//! A random tree of colour, coordinate, trigonometric and arithmetic nodes is
//! built under seeded depth thresholds, evaluated over normalized X and Y
//! fields, tiled onto the canvas and quantized to 8-bit RGB.

#![forbid(unsafe_code)]

/// Expression tree construction and evaluation
pub mod expression;
/// Coordinate fields, broadcasting and tiling
pub mod field;
/// Input/output operations, configuration and error handling
pub mod io;
/// Guarded arithmetic keeping fields finite
pub mod math;
/// Configured end-to-end synthesis
pub mod synthesis;

pub use field::PixelBuffer;
pub use io::error::{Result, SynthesisError};
pub use synthesis::{SynthesisConfig, Synthesizer, synthesize};
