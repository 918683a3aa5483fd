//! Random expression tree construction
//!
//! Two thresholds govern the whole tree: below `min` only non-leaf operators
//! are eligible, at or beyond `max` only leaves. Between them every operator
//! competes with equal probability. Because binary nodes fan out, node count
//! can grow exponentially in `max - min`, so every node is charged against a
//! budget.

use crate::expression::node::ExpressionNode;
use crate::expression::operator::Operator;
use crate::field::coordinates::random_color;
use crate::io::configuration::MAX_TREE_DEPTH;
use crate::io::error::{Result, SynthesisError, invalid_parameter, resource_exhausted};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::ops::RangeInclusive;
use tracing::trace;

/// Depth thresholds shared by every subtree of one synthesis
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DepthThresholds {
    /// Leaves become eligible at this depth
    pub min: usize,
    /// Non-leaves stop being eligible at this depth
    pub max: usize,
}

impl DepthThresholds {
    /// Draw both thresholds uniformly from their inclusive ranges
    ///
    /// # Panics
    ///
    /// Panics if either range is empty; `SynthesisConfig::validate` rejects
    /// such ranges before any draw happens
    pub fn draw<R: Rng + ?Sized>(
        rng: &mut R,
        min_range: &RangeInclusive<usize>,
        max_range: &RangeInclusive<usize>,
    ) -> Self {
        let min = rng.random_range(min_range.clone());
        let max = rng.random_range(max_range.clone());
        Self { min, max }
    }

    /// Operators eligible at `depth`, in selection-table order
    pub fn eligible_operators(&self, depth: usize) -> Vec<Operator> {
        Operator::ALL
            .into_iter()
            .filter(|op| {
                if op.is_leaf() {
                    depth >= self.min
                } else {
                    depth < self.max
                }
            })
            .collect()
    }
}

/// Builds one random expression tree
pub struct TreeBuilder<'a, R: Rng + ?Sized> {
    rng: &'a mut R,
    thresholds: DepthThresholds,
    node_budget: usize,
    nodes_built: usize,
}

impl<'a, R: Rng + ?Sized> TreeBuilder<'a, R> {
    /// Create a builder drawing from `rng`
    pub const fn new(rng: &'a mut R, thresholds: DepthThresholds, node_budget: usize) -> Self {
        Self {
            rng,
            thresholds,
            node_budget,
            nodes_built: 0,
        }
    }

    /// Thresholds governing this tree
    pub const fn thresholds(&self) -> DepthThresholds {
        self.thresholds
    }

    /// Nodes created so far
    pub const fn nodes_built(&self) -> usize {
        self.nodes_built
    }

    /// Build a complete tree rooted at depth 0
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No operator is eligible at some depth (`min` greater than `max`)
    /// - The tree grows beyond the node budget
    /// - `max` lets the tree grow deeper than `MAX_TREE_DEPTH`
    pub fn build(&mut self) -> Result<ExpressionNode> {
        self.build_at(0)
    }

    /// Build a subtree whose root sits at `depth`
    ///
    /// Children are built left first, so the sequence of random draws and
    /// therefore the tree is a pure function of the generator state.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No operator is eligible at some depth (`min` greater than `max`)
    /// - The tree grows beyond the node budget
    /// - A node would sit deeper than `MAX_TREE_DEPTH`
    pub fn build_at(&mut self, depth: usize) -> Result<ExpressionNode> {
        if depth > MAX_TREE_DEPTH {
            return Err(invalid_parameter(
                "depth",
                &depth,
                &format!("must not exceed {MAX_TREE_DEPTH}"),
            ));
        }

        self.nodes_built += 1;
        if self.nodes_built > self.node_budget {
            return Err(resource_exhausted(
                "expression nodes",
                &self.node_budget,
                &self.nodes_built,
            ));
        }

        let eligible = self.thresholds.eligible_operators(depth);
        let operator = eligible
            .choose(&mut *self.rng)
            .copied()
            .ok_or(SynthesisError::TreeConstruction {
                depth,
                depth_min: self.thresholds.min,
                depth_max: self.thresholds.max,
            })?;
        trace!(depth, %operator, "selected operator");

        let next = depth + 1;
        let node = match operator {
            Operator::Color => ExpressionNode::Color(random_color(&mut *self.rng)),
            Operator::CoordX => ExpressionNode::CoordX,
            Operator::CoordY => ExpressionNode::CoordY,
            Operator::Sin => ExpressionNode::Sin(Box::new(self.build_at(next)?)),
            Operator::Cos => ExpressionNode::Cos(Box::new(self.build_at(next)?)),
            Operator::Add => {
                let (left, right) = self.build_pair(next)?;
                ExpressionNode::Add(left, right)
            }
            Operator::Subtract => {
                let (left, right) = self.build_pair(next)?;
                ExpressionNode::Subtract(left, right)
            }
            Operator::Multiply => {
                let (left, right) = self.build_pair(next)?;
                ExpressionNode::Multiply(left, right)
            }
            Operator::SafeDivide => {
                let (left, right) = self.build_pair(next)?;
                ExpressionNode::SafeDivide(left, right)
            }
        };

        Ok(node)
    }

    fn build_pair(&mut self, depth: usize) -> Result<(Box<ExpressionNode>, Box<ExpressionNode>)> {
        let left = Box::new(self.build_at(depth)?);
        let right = Box::new(self.build_at(depth)?);
        Ok((left, right))
    }
}
