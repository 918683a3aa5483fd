//! Positional and colour leaves of the expression grammar
//!
//! Coordinate fields are shaped so they broadcast against a
//! `(height, width, channels)` canvas: X varies along the width axis only and
//! Y along the height axis only. Both are computed once per canvas size.

use ndarray::Array3;
use rand::Rng;

/// Precomputed X and Y coordinate fields for a fixed canvas size
#[derive(Clone, Debug)]
pub struct CoordinateFields {
    width: usize,
    height: usize,
    x: Array3<f64>,
    y: Array3<f64>,
}

impl CoordinateFields {
    /// Build both coordinate fields for a `width` x `height` canvas
    pub fn new(width: usize, height: usize) -> Self {
        let x = Array3::from_shape_fn((1, width, 1), |(_, col, _)| unit_position(col, width));
        let y = Array3::from_shape_fn((height, 1, 1), |(row, _, _)| unit_position(row, height));

        Self {
            width,
            height,
            x,
            y,
        }
    }

    /// Canvas width the fields were built for
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Canvas height the fields were built for
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Field of shape `(1, width, 1)` rising from 0.0 to 1.0 left to right
    pub const fn x_field(&self) -> &Array3<f64> {
        &self.x
    }

    /// Field of shape `(height, 1, 1)` rising from 0.0 to 1.0 top to bottom
    pub const fn y_field(&self) -> &Array3<f64> {
        &self.y
    }
}

// Evenly spaced over [0, 1] with both endpoints exact
fn unit_position(index: usize, count: usize) -> f64 {
    if count > 1 {
        index as f64 / (count - 1) as f64
    } else {
        0.0
    }
}

/// Draw three independent uniform channel intensities in `[0, 1)`
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> [f64; 3] {
    [rng.random(), rng.random(), rng.random()]
}

/// Flat colour field of shape `(1, 1, 3)`
pub fn color_field(color: [f64; 3]) -> Array3<f64> {
    Array3::from_shape_fn((1, 1, 3), |(_, _, channel)| {
        color.get(channel).copied().unwrap_or(0.0)
    })
}

/// Flat colour field with freshly drawn channel intensities
pub fn random_color_field<R: Rng + ?Sized>(rng: &mut R) -> Array3<f64> {
    color_field(random_color(rng))
}
