//! Guarded element operations keeping every intermediate value finite
//!
//! Random trees routinely produce denominators that are exactly zero and
//! chains of multiplications and divisions that overflow. Division is guarded
//! against the first, and binary results are saturated against the second.

use num_traits::Float;

/// Division with the denominator magnitude clamped to at least `epsilon`
///
/// The sign of the denominator is kept; zero of either sign divides by
/// `±epsilon`.
pub fn safe_divide<T: Float>(numerator: T, denominator: T, epsilon: T) -> T {
    let magnitude = denominator.abs().max(epsilon);
    let guarded = if denominator.is_sign_negative() {
        -magnitude
    } else {
        magnitude
    };
    numerator / guarded
}

/// Division with the denominator clamped from below at `epsilon`
///
/// Every negative denominator is replaced by `+epsilon`, flipping the sign
/// of the quotient.
pub fn clamped_divide<T: Float>(numerator: T, denominator: T, epsilon: T) -> T {
    numerator / denominator.max(epsilon)
}

/// Replace non-finite values: `NaN` becomes zero, infinities the largest finite value
pub fn saturate<T: Float>(value: T) -> T {
    if value.is_nan() {
        T::zero()
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            T::max_value()
        } else {
            T::min_value()
        }
    } else {
        value
    }
}

/// Denominator guard used by the division operator
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DivisionGuard {
    /// Clamp the magnitude of the denominator, keeping its sign
    #[default]
    Symmetric,
    /// Clamp the denominator from below only
    ClampBelow,
}

impl DivisionGuard {
    /// Divide using this guard
    pub fn divide<T: Float>(self, numerator: T, denominator: T, epsilon: T) -> T {
        match self {
            Self::Symmetric => safe_divide(numerator, denominator, epsilon),
            Self::ClampBelow => clamped_divide(numerator, denominator, epsilon),
        }
    }
}
