//! Closed set of operators the tree builder chooses from

use std::fmt;

/// Operation performed by one expression node
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Flat random colour leaf
    Color,
    /// Horizontal coordinate leaf
    CoordX,
    /// Vertical coordinate leaf
    CoordY,
    /// Element-wise sine
    Sin,
    /// Element-wise cosine
    Cos,
    /// Element-wise addition
    Add,
    /// Element-wise subtraction
    Subtract,
    /// Element-wise multiplication
    Multiply,
    /// Element-wise division with a guarded denominator
    SafeDivide,
}

impl Operator {
    /// Every operator in selection-table order
    pub const ALL: [Self; 9] = [
        Self::Color,
        Self::CoordX,
        Self::CoordY,
        Self::Sin,
        Self::Cos,
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::SafeDivide,
    ];

    /// Number of child expressions consumed
    pub const fn arity(self) -> usize {
        match self {
            Self::Color | Self::CoordX | Self::CoordY => 0,
            Self::Sin | Self::Cos => 1,
            Self::Add | Self::Subtract | Self::Multiply | Self::SafeDivide => 2,
        }
    }

    /// Whether the operator takes no children
    pub const fn is_leaf(self) -> bool {
        self.arity() == 0
    }

    /// Short lowercase name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Color => "rgb",
            Self::CoordX => "x",
            Self::CoordY => "y",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Add => "add",
            Self::Subtract => "sub",
            Self::Multiply => "mul",
            Self::SafeDivide => "div",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
