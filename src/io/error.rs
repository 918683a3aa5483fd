//! Error types for tree construction, evaluation, tiling and image output

use std::fmt;
use std::path::PathBuf;

/// Main error type for all synthesis operations
#[derive(Debug)]
pub enum SynthesisError {
    /// Field shape cannot be reconciled with the requested shape
    ///
    /// Raised by broadcasting when two operand axes differ and neither is 1,
    /// and by the tiler when a target axis is not an integer multiple of the
    /// evaluated field's axis.
    ShapeMismatch {
        /// Name of the operation that rejected the shapes
        operation: &'static str,
        /// Shape of the evaluated field (height, width, channels)
        field_shape: [usize; 3],
        /// Shape that was requested (height, width, channels)
        target_shape: [usize; 3],
    },

    /// No operator was eligible at some depth of the tree
    TreeConstruction {
        /// Depth at which the eligible operator set was empty
        depth: usize,
        /// Minimum leaf depth in effect
        depth_min: usize,
        /// Maximum non-leaf depth in effect
        depth_max: usize,
    },

    /// A configured node or time budget was exceeded
    ResourceExhaustion {
        /// Name of the exhausted resource
        resource: &'static str,
        /// Configured limit
        limit: String,
        /// Amount consumed when the limit was hit
        reached: String,
    },

    /// Configuration parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to encode the pixel buffer to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image encoding error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for SynthesisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShapeMismatch {
                operation,
                field_shape,
                target_shape,
            } => {
                write!(
                    f,
                    "Shape mismatch in {operation}: field {}x{}x{} cannot fill {}x{}x{}",
                    field_shape[0],
                    field_shape[1],
                    field_shape[2],
                    target_shape[0],
                    target_shape[1],
                    target_shape[2]
                )
            }
            Self::TreeConstruction {
                depth,
                depth_min,
                depth_max,
            } => {
                write!(
                    f,
                    "No eligible operator at depth {depth} (depth_min {depth_min}, depth_max {depth_max})"
                )
            }
            Self::ResourceExhaustion {
                resource,
                limit,
                reached,
            } => {
                write!(f, "Budget for {resource} exhausted: reached {reached} (limit {limit})")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for SynthesisError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for synthesis results
pub type Result<T> = std::result::Result<T, SynthesisError>;

impl From<std::io::Error> for SynthesisError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> SynthesisError {
    SynthesisError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a shape mismatch error from two 3-D shapes
pub const fn shape_mismatch(
    operation: &'static str,
    field_shape: [usize; 3],
    target_shape: [usize; 3],
) -> SynthesisError {
    SynthesisError::ShapeMismatch {
        operation,
        field_shape,
        target_shape,
    }
}

/// Create a resource exhaustion error
pub fn resource_exhausted(
    resource: &'static str,
    limit: &impl ToString,
    reached: &impl ToString,
) -> SynthesisError {
    SynthesisError::ResourceExhaustion {
        resource,
        limit: limit.to_string(),
        reached: reached.to_string(),
    }
}
