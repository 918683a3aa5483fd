//! Numeric fields the expression tree is evaluated over
//!
//! This module contains:
//! - Coordinate and colour leaf fields
//! - Broadcasting element-wise operations
//! - Tiling and quantization into the final pixel buffer

/// Element-wise operations with broadcasting
pub mod broadcast;
/// Coordinate and colour leaf fields
pub mod coordinates;
/// Integer-ratio tiling and 8-bit quantization
pub mod tiling;

pub use coordinates::CoordinateFields;
pub use tiling::PixelBuffer;
