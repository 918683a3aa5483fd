//! Expression tree nodes
//!
//! Each variant owns exactly as many children as its operator's arity, so
//! the tree is strict: no shared subtrees and no cycles. Colour leaves carry
//! their channel values, drawn once when the tree is built.

use crate::expression::operator::Operator;
use std::fmt;

/// One node of a random expression tree
#[derive(Clone, Debug, PartialEq)]
pub enum ExpressionNode {
    /// Flat colour with fixed channel intensities
    Color([f64; 3]),
    /// Horizontal coordinate field
    CoordX,
    /// Vertical coordinate field
    CoordY,
    /// Sine of the operand
    Sin(Box<Self>),
    /// Cosine of the operand
    Cos(Box<Self>),
    /// Sum of both operands
    Add(Box<Self>, Box<Self>),
    /// Left operand minus right operand
    Subtract(Box<Self>, Box<Self>),
    /// Product of both operands
    Multiply(Box<Self>, Box<Self>),
    /// Left operand divided by the guarded right operand
    SafeDivide(Box<Self>, Box<Self>),
}

impl ExpressionNode {
    /// Operator performed by this node
    pub const fn operator(&self) -> Operator {
        match self {
            Self::Color(_) => Operator::Color,
            Self::CoordX => Operator::CoordX,
            Self::CoordY => Operator::CoordY,
            Self::Sin(_) => Operator::Sin,
            Self::Cos(_) => Operator::Cos,
            Self::Add(..) => Operator::Add,
            Self::Subtract(..) => Operator::Subtract,
            Self::Multiply(..) => Operator::Multiply,
            Self::SafeDivide(..) => Operator::SafeDivide,
        }
    }

    /// Number of children
    pub const fn arity(&self) -> usize {
        self.operator().arity()
    }

    /// Children in evaluation order, left first
    pub fn children(&self) -> Vec<&Self> {
        match self {
            Self::Color(_) | Self::CoordX | Self::CoordY => Vec::new(),
            Self::Sin(operand) | Self::Cos(operand) => vec![operand.as_ref()],
            Self::Add(left, right)
            | Self::Subtract(left, right)
            | Self::Multiply(left, right)
            | Self::SafeDivide(left, right) => vec![left.as_ref(), right.as_ref()],
        }
    }

    /// Total number of nodes in this subtree
    pub fn node_count(&self) -> usize {
        1 + self
            .children()
            .into_iter()
            .map(Self::node_count)
            .sum::<usize>()
    }

    /// Depth of the deepest node, counting this node as depth 0
    pub fn depth(&self) -> usize {
        self.children()
            .into_iter()
            .map(|child| child.depth() + 1)
            .max()
            .unwrap_or(0)
    }

    /// Depths of the shallowest and deepest leaves, counting this node as depth 0
    pub fn leaf_depths(&self) -> (usize, usize) {
        let children = self.children();
        if children.is_empty() {
            return (0, 0);
        }

        children
            .into_iter()
            .map(Self::leaf_depths)
            .fold((usize::MAX, 0), |(shallowest, deepest), (low, high)| {
                (shallowest.min(low + 1), deepest.max(high + 1))
            })
    }
}

impl fmt::Display for ExpressionNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Color([r, g, b]) => write!(f, "rgb({r:.2}, {g:.2}, {b:.2})"),
            Self::CoordX | Self::CoordY => write!(f, "{}", self.operator()),
            Self::Sin(operand) | Self::Cos(operand) => {
                write!(f, "{}({operand})", self.operator())
            }
            Self::Add(left, right)
            | Self::Subtract(left, right)
            | Self::Multiply(left, right)
            | Self::SafeDivide(left, right) => {
                write!(f, "{}({left}, {right})", self.operator())
            }
        }
    }
}
