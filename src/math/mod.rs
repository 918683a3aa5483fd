//! Mathematical utilities for field evaluation

/// Safe division and saturation of non-finite values
pub mod arithmetic;
