//! Random expression trees and their evaluation
//!
//! This module contains:
//! - The closed operator set and its arities
//! - The expression node sum type
//! - Random tree construction under depth thresholds and a node budget
//! - Bottom-up evaluation over coordinate fields

/// Random tree construction
pub mod builder;
/// Tree evaluation over coordinate fields
pub mod evaluator;
/// Expression tree nodes
pub mod node;
/// Operator set and arities
pub mod operator;

pub use builder::{DepthThresholds, TreeBuilder};
pub use evaluator::Evaluator;
pub use node::ExpressionNode;
pub use operator::Operator;
