//! Bottom-up evaluation of expression trees over coordinate fields

use crate::expression::node::ExpressionNode;
use crate::field::broadcast::{map_field, zip_broadcast};
use crate::field::coordinates::{CoordinateFields, color_field};
use crate::io::error::{Result, resource_exhausted};
use crate::math::arithmetic::{DivisionGuard, saturate};
use ndarray::Array3;
use std::time::{Duration, Instant};

/// Evaluates trees against one set of coordinate fields
///
/// Holds no per-call state, so evaluating the same tree twice yields
/// identical fields.
#[derive(Clone, Copy, Debug)]
pub struct Evaluator<'a> {
    coordinates: &'a CoordinateFields,
    epsilon: f64,
    guard: DivisionGuard,
    time_budget: Option<Duration>,
}

impl<'a> Evaluator<'a> {
    /// Create an evaluator
    pub const fn new(
        coordinates: &'a CoordinateFields,
        epsilon: f64,
        guard: DivisionGuard,
        time_budget: Option<Duration>,
    ) -> Self {
        Self {
            coordinates,
            epsilon,
            guard,
            time_budget,
        }
    }

    /// Evaluate `node` into a field broadcastable against the canvas
    ///
    /// The result's shape depends on the leaves reached: a tree using only X
    /// has shape `(1, width, 1)`, one mixing X, Y and a colour has
    /// `(height, width, 3)`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The time budget runs out before the last node is evaluated
    /// - Operand shapes fail to broadcast
    pub fn evaluate(&self, node: &ExpressionNode) -> Result<Array3<f64>> {
        let started = Instant::now();
        self.evaluate_node(node, started)
    }

    fn evaluate_node(&self, node: &ExpressionNode, started: Instant) -> Result<Array3<f64>> {
        self.check_deadline(started)?;

        match node {
            ExpressionNode::Color(color) => Ok(color_field(*color)),
            ExpressionNode::CoordX => Ok(self.coordinates.x_field().clone()),
            ExpressionNode::CoordY => Ok(self.coordinates.y_field().clone()),
            ExpressionNode::Sin(operand) => {
                Ok(map_field(self.evaluate_node(operand, started)?, f64::sin))
            }
            ExpressionNode::Cos(operand) => {
                Ok(map_field(self.evaluate_node(operand, started)?, f64::cos))
            }
            ExpressionNode::Add(left, right) => {
                self.combine(left, right, started, |a, b| a + b)
            }
            ExpressionNode::Subtract(left, right) => {
                self.combine(left, right, started, |a, b| a - b)
            }
            ExpressionNode::Multiply(left, right) => {
                self.combine(left, right, started, |a, b| a * b)
            }
            ExpressionNode::SafeDivide(left, right) => {
                let (guard, epsilon) = (self.guard, self.epsilon);
                self.combine(left, right, started, move |a, b| guard.divide(a, b, epsilon))
            }
        }
    }

    fn combine<F>(
        &self,
        left: &ExpressionNode,
        right: &ExpressionNode,
        started: Instant,
        op: F,
    ) -> Result<Array3<f64>>
    where
        F: Fn(f64, f64) -> f64,
    {
        let lhs = self.evaluate_node(left, started)?;
        let rhs = self.evaluate_node(right, started)?;
        zip_broadcast(&lhs, &rhs, |a, b| saturate(op(a, b)))
    }

    fn check_deadline(&self, started: Instant) -> Result<()> {
        match self.time_budget {
            Some(budget) if started.elapsed() >= budget => Err(resource_exhausted(
                "evaluation time",
                &format!("{budget:?}"),
                &format!("{:?}", started.elapsed()),
            )),
            _ => Ok(()),
        }
    }
}
