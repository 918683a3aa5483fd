//! Element-wise operations over fields of broadcast-compatible shapes

use crate::io::error::{Result, shape_mismatch};
use ndarray::{Array3, Zip};

/// Shape of a field as `[height, width, channels]`
pub fn field_shape(field: &Array3<f64>) -> [usize; 3] {
    let (rows, cols, channels) = field.dim();
    [rows, cols, channels]
}

/// Broadcast shape of two 3-D shapes
///
/// Each axis must either match or be 1 on one side.
///
/// # Errors
///
/// Returns `ShapeMismatch` if an axis differs and neither side is 1
pub fn broadcast_shape(lhs: [usize; 3], rhs: [usize; 3]) -> Result<[usize; 3]> {
    let mut shape = [0; 3];
    for ((out, &a), &b) in shape.iter_mut().zip(lhs.iter()).zip(rhs.iter()) {
        *out = match (a, b) {
            _ if a == b => a,
            (1, _) => b,
            (_, 1) => a,
            _ => return Err(shape_mismatch("broadcast", lhs, rhs)),
        };
    }
    Ok(shape)
}

/// Combine two fields element-wise after broadcasting both to a common shape
///
/// # Errors
///
/// Returns `ShapeMismatch` if the operand shapes are not broadcast-compatible
pub fn zip_broadcast<F>(lhs: &Array3<f64>, rhs: &Array3<f64>, op: F) -> Result<Array3<f64>>
where
    F: Fn(f64, f64) -> f64,
{
    let lhs_shape = field_shape(lhs);
    let rhs_shape = field_shape(rhs);
    let [rows, cols, channels] = broadcast_shape(lhs_shape, rhs_shape)?;

    let left = lhs
        .broadcast((rows, cols, channels))
        .ok_or_else(|| shape_mismatch("broadcast", lhs_shape, rhs_shape))?;
    let right = rhs
        .broadcast((rows, cols, channels))
        .ok_or_else(|| shape_mismatch("broadcast", rhs_shape, lhs_shape))?;

    Ok(Zip::from(left).and(right).map_collect(|&a, &b| op(a, b)))
}

/// Apply a unary function to every element, keeping the shape
pub fn map_field<F>(field: Array3<f64>, op: F) -> Array3<f64>
where
    F: Fn(f64) -> f64,
{
    field.mapv_into(op)
}
