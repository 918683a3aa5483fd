//! Integer-ratio tiling of evaluated fields and 8-bit quantization
//!
//! An evaluated field keeps whatever broadcast shape its leaves produced, for
//! example `(1, 1, 3)` for a flat colour or `(height, 1, 1)` for a function of
//! Y alone. Finalizing repeats the field along each axis until it fills the
//! canvas exactly, then clips and quantizes it.

use crate::field::broadcast::field_shape;
use crate::io::error::{Result, invalid_parameter, shape_mismatch};
use image::{DynamicImage, GrayImage, RgbImage};
use ndarray::Array3;

/// Finalized 8-bit canvas of shape `(height, width, channels)`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    pixels: Array3<u8>,
}

impl PixelBuffer {
    /// Wrap an existing `(height, width, channels)` array
    pub const fn from_array(pixels: Array3<u8>) -> Self {
        Self { pixels }
    }

    /// Canvas width in pixels
    pub fn width(&self) -> usize {
        self.pixels.dim().1
    }

    /// Canvas height in pixels
    pub fn height(&self) -> usize {
        self.pixels.dim().0
    }

    /// Channels per pixel
    pub fn channels(&self) -> usize {
        self.pixels.dim().2
    }

    /// Underlying `(height, width, channels)` array
    pub const fn as_array(&self) -> &Array3<u8> {
        &self.pixels
    }

    /// Channel value at `(row, col, channel)`, if in bounds
    pub fn get(&self, row: usize, col: usize, channel: usize) -> Option<u8> {
        self.pixels.get([row, col, channel]).copied()
    }

    /// Convert into an image for encoding
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The channel count is neither 1 nor 3
    /// - A dimension does not fit in `u32`
    pub fn to_dynamic_image(&self) -> Result<DynamicImage> {
        let width = u32::try_from(self.width())
            .map_err(|e| invalid_parameter("width", &self.width(), &e))?;
        let height = u32::try_from(self.height())
            .map_err(|e| invalid_parameter("height", &self.height(), &e))?;
        // Logical iteration order is row-major regardless of memory layout
        let raw: Vec<u8> = self.pixels.iter().copied().collect();

        let buffer_error = || {
            invalid_parameter(
                "pixels",
                &shape_description(self),
                &"buffer length does not match image dimensions",
            )
        };

        match self.channels() {
            1 => GrayImage::from_raw(width, height, raw)
                .map(DynamicImage::ImageLuma8)
                .ok_or_else(buffer_error),
            3 => RgbImage::from_raw(width, height, raw)
                .map(DynamicImage::ImageRgb8)
                .ok_or_else(buffer_error),
            other => Err(invalid_parameter(
                "channels",
                &other,
                &"only 1 or 3 channel buffers can be encoded",
            )),
        }
    }
}

fn shape_description(buffer: &PixelBuffer) -> String {
    format!(
        "{}x{}x{}",
        buffer.height(),
        buffer.width(),
        buffer.channels()
    )
}

/// Tile, clip and quantize an evaluated field into an 8-bit canvas
///
/// # Errors
///
/// Returns `ShapeMismatch` if any target axis is not an exact integer
/// multiple of the corresponding field axis
pub fn finalize(
    field: &Array3<f64>,
    target_width: usize,
    target_height: usize,
    target_channels: usize,
) -> Result<PixelBuffer> {
    let tiled = tile_to(field, [target_height, target_width, target_channels])?;
    Ok(PixelBuffer::from_array(tiled.mapv(quantize)))
}

/// Repeat a field along each axis to exactly fill `target`
///
/// # Errors
///
/// Returns `ShapeMismatch` if any target axis is not an exact integer
/// multiple of the corresponding field axis
pub fn tile_to(field: &Array3<f64>, target: [usize; 3]) -> Result<Array3<f64>> {
    let shape = field_shape(field);
    let divisible = shape
        .iter()
        .zip(target.iter())
        .all(|(&axis, &goal)| axis > 0 && goal % axis == 0);
    if !divisible {
        return Err(shape_mismatch("tile", shape, target));
    }

    let [rows, cols, channels] = shape;
    let [target_rows, target_cols, target_channels] = target;

    Ok(Array3::from_shape_fn(
        (target_rows, target_cols, target_channels),
        |(row, col, channel)| {
            field
                .get([row % rows, col % cols, channel % channels])
                .copied()
                .unwrap_or(0.0)
        },
    ))
}

// Ties round to even
fn quantize(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round_ties_even() as u8
}
