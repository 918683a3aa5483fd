//! End-to-end synthesis: thresholds, tree, evaluation, finalization
//!
//! A single seeded generator drives every random draw of one synthesis, in a
//! fixed order: the two depth thresholds first, then the tree left to right.
//! The same seed therefore reproduces the same pixels byte for byte.

use crate::expression::builder::{DepthThresholds, TreeBuilder};
use crate::expression::evaluator::Evaluator;
use crate::expression::node::ExpressionNode;
use crate::field::coordinates::CoordinateFields;
use crate::field::tiling::{PixelBuffer, finalize};
use crate::io::configuration::OUTPUT_CHANNELS;
use crate::io::error::Result;
use crate::synthesis::config::SynthesisConfig;
use ndarray::Array3;
use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::debug;

/// Result of one synthesis call
#[derive(Clone, Debug)]
pub struct Synthesis {
    /// Seed that reproduces this image
    pub seed: u64,
    /// Depth thresholds drawn for the tree
    pub thresholds: DepthThresholds,
    /// Number of nodes in the tree
    pub node_count: usize,
    /// Finalized 8-bit canvas
    pub pixels: PixelBuffer,
}

/// Reusable synthesizer for a fixed configuration
///
/// Read-only after construction; independent calls share nothing but the
/// precomputed coordinate fields, so one instance can serve many threads.
#[derive(Clone, Debug)]
pub struct Synthesizer {
    config: SynthesisConfig,
    coordinates: CoordinateFields,
}

impl Synthesizer {
    /// Validate `config` and precompute the coordinate fields
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the configuration fails validation
    pub fn new(config: SynthesisConfig) -> Result<Self> {
        config.validate()?;
        let coordinates = CoordinateFields::new(config.width, config.height);
        Ok(Self {
            config,
            coordinates,
        })
    }

    /// Configuration in effect
    pub const fn config(&self) -> &SynthesisConfig {
        &self.config
    }

    /// Coordinate fields shared by every call
    pub const fn coordinates(&self) -> &CoordinateFields {
        &self.coordinates
    }

    /// Synthesize one image
    ///
    /// Without a seed a fresh one is drawn and returned in the result.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The tree exceeds the node budget
    /// - Evaluation exceeds the time budget
    /// - The evaluated field cannot be tiled onto the canvas
    #[tracing::instrument(skip(self), fields(width = self.config.width, height = self.config.height))]
    pub fn synthesize(&self, seed: Option<u64>) -> Result<Synthesis> {
        let seed = seed.unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);

        let (tree, thresholds) = self.build_tree(&mut rng)?;
        let node_count = tree.node_count();
        debug!(
            seed,
            depth_min = thresholds.min,
            depth_max = thresholds.max,
            node_count,
            "built expression tree"
        );
        debug!(formula = %tree, "expression");

        let field = self.evaluate(&tree)?;
        let pixels = finalize(
            &field,
            self.config.width,
            self.config.height,
            OUTPUT_CHANNELS,
        )?;

        Ok(Synthesis {
            seed,
            thresholds,
            node_count,
            pixels,
        })
    }

    /// Draw thresholds and build one tree from `rng`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The tree exceeds the node budget
    /// - No operator is eligible at some depth
    pub fn build_tree<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<(ExpressionNode, DepthThresholds)> {
        let thresholds = DepthThresholds::draw(
            &mut *rng,
            &self.config.depth_min_range,
            &self.config.depth_max_range,
        );
        let tree = TreeBuilder::new(rng, thresholds, self.config.node_budget).build()?;
        Ok((tree, thresholds))
    }

    /// Evaluate a tree over this synthesizer's coordinate fields
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Evaluation exceeds the time budget
    /// - Operand shapes fail to broadcast
    pub fn evaluate(&self, tree: &ExpressionNode) -> Result<Array3<f64>> {
        Evaluator::new(
            &self.coordinates,
            self.config.epsilon,
            self.config.division,
            self.config.time_budget,
        )
        .evaluate(tree)
    }
}

/// Synthesize one `width` x `height` RGB canvas with default parameters
///
/// # Errors
///
/// Returns an error if the dimensions are invalid or synthesis fails
pub fn synthesize(width: usize, height: usize, seed: Option<u64>) -> Result<PixelBuffer> {
    Synthesizer::new(SynthesisConfig::new(width, height))?
        .synthesize(seed)
        .map(|synthesis| synthesis.pixels)
}
