//! Synthesis parameters and their validation

use crate::io::configuration::{
    DEFAULT_DEPTH_MAX_RANGE, DEFAULT_DEPTH_MIN_RANGE, DEFAULT_EPSILON, DEFAULT_NODE_BUDGET,
    MAX_CANVAS_DIMENSION, MAX_NODE_BUDGET, MAX_TREE_DEPTH,
};
use crate::io::error::{Result, invalid_parameter};
use crate::math::arithmetic::DivisionGuard;
use std::ops::RangeInclusive;
use std::time::Duration;

/// Parameters controlling one synthesizer
#[derive(Clone, Debug, PartialEq)]
pub struct SynthesisConfig {
    /// Canvas width in pixels
    pub width: usize,
    /// Canvas height in pixels
    pub height: usize,
    /// Range from which the minimum leaf depth is drawn
    pub depth_min_range: RangeInclusive<usize>,
    /// Range from which the maximum non-leaf depth is drawn
    pub depth_max_range: RangeInclusive<usize>,
    /// Denominator clamp used by safe division
    pub epsilon: f64,
    /// Maximum number of nodes in one tree
    pub node_budget: usize,
    /// Optional wall-clock limit for evaluating one tree
    pub time_budget: Option<Duration>,
    /// How the division operator guards its denominator
    pub division: DivisionGuard,
}

impl SynthesisConfig {
    /// Default parameters for a `width` x `height` canvas
    pub const fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            depth_min_range: DEFAULT_DEPTH_MIN_RANGE,
            depth_max_range: DEFAULT_DEPTH_MAX_RANGE,
            epsilon: DEFAULT_EPSILON,
            node_budget: DEFAULT_NODE_BUDGET,
            time_budget: None,
            division: DivisionGuard::Symmetric,
        }
    }

    /// Replace both depth ranges
    #[must_use]
    pub fn with_depth_ranges(
        mut self,
        depth_min_range: RangeInclusive<usize>,
        depth_max_range: RangeInclusive<usize>,
    ) -> Self {
        self.depth_min_range = depth_min_range;
        self.depth_max_range = depth_max_range;
        self
    }

    /// Check every parameter against its allowed range
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if:
    /// - A canvas dimension is zero or exceeds `MAX_CANVAS_DIMENSION`
    /// - A depth range is empty
    /// - The minimum depth range reaches past the start of the maximum depth range
    /// - The maximum depth range exceeds `MAX_TREE_DEPTH`
    /// - `epsilon` is not a positive finite number
    /// - `node_budget` is zero or exceeds `MAX_NODE_BUDGET`
    pub fn validate(&self) -> Result<()> {
        for (parameter, value) in [("width", self.width), ("height", self.height)] {
            if value == 0 || value > MAX_CANVAS_DIMENSION {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!("must be between 1 and {MAX_CANVAS_DIMENSION}"),
                ));
            }
        }

        for (parameter, range) in [
            ("depth_min_range", &self.depth_min_range),
            ("depth_max_range", &self.depth_max_range),
        ] {
            if range.is_empty() {
                return Err(invalid_parameter(
                    parameter,
                    &format_range(range),
                    &"range is empty",
                ));
            }
        }

        // Guarantees min <= max for every draw, so some operator is always eligible
        if self.depth_min_range.end() > self.depth_max_range.start() {
            return Err(invalid_parameter(
                "depth_min_range",
                &format_range(&self.depth_min_range),
                &format!(
                    "must end at or before the start of depth_max_range {}",
                    format_range(&self.depth_max_range)
                ),
            ));
        }

        if *self.depth_max_range.end() > MAX_TREE_DEPTH {
            return Err(invalid_parameter(
                "depth_max_range",
                &format_range(&self.depth_max_range),
                &format!("must not exceed {MAX_TREE_DEPTH}"),
            ));
        }

        if !(self.epsilon.is_finite() && self.epsilon > 0.0) {
            return Err(invalid_parameter(
                "epsilon",
                &self.epsilon,
                &"must be a positive finite number",
            ));
        }

        if self.node_budget == 0 || self.node_budget > MAX_NODE_BUDGET {
            return Err(invalid_parameter(
                "node_budget",
                &self.node_budget,
                &format!("must be between 1 and {MAX_NODE_BUDGET}"),
            ));
        }

        Ok(())
    }
}

/// Render an inclusive range as `LOW..=HIGH`
pub fn format_range(range: &RangeInclusive<usize>) -> String {
    format!("{}..={}", range.start(), range.end())
}
