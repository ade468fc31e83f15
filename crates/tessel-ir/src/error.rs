use tessel_element::{ElementType, ElementTypeError};
use thiserror::Error;

use crate::op::ArithmeticOp;
use crate::shape::Shape;

/// Error type for graph construction.
///
/// Every variant is raised synchronously while a node or graph is being built. A failed
/// construction produces no node and leaves the rest of the graph untouched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    /// The operands of a binary elementwise operator have different element types.
    #[error("Element type mismatch: {lhs} ({}) != {rhs} ({})", .lhs.c_type_string(), .rhs.c_type_string())]
    TypeMismatch {
        /// Element type of the left operand.
        lhs: ElementType,
        /// Element type of the right operand.
        rhs: ElementType,
    },

    /// The operand shapes are neither identical nor broadcast-compatible.
    #[error("Shape mismatch: {lhs} is not compatible with {rhs}")]
    ShapeMismatch {
        /// Shape of the left operand.
        lhs: Shape,
        /// Shape of the right operand.
        rhs: Shape,
    },

    /// An operator received the wrong number of operands.
    #[error("{op} expects {expected} operands, but got {actual}")]
    Arity {
        /// The operator being constructed.
        op: ArithmeticOp,
        /// The required number of operands.
        expected: usize,
        /// The number of operands supplied.
        actual: usize,
    },

    /// A textual element type designator is not canonical.
    #[error(transparent)]
    UnknownType(#[from] ElementTypeError),

    /// A textual operator label does not name any arithmetic operator.
    #[error("Unknown arithmetic operator '{0}'")]
    UnknownOp(String),

    /// A node listed as a graph parameter is not a parameter.
    #[error("Node {0} is not a parameter")]
    NotAParameter(String),

    /// A parameter reachable from the results is missing from the graph parameters.
    #[error("Parameter {0} is reachable from the results but is not a graph parameter")]
    UnlistedParameter(String),
}

impl GraphError {
    /// Returns a short hint on how to resolve the error.
    pub fn suggestion(&self) -> &'static str {
        match self {
            Self::TypeMismatch { .. } => {
                "Convert one operand so both share the same element type"
            }
            Self::ShapeMismatch { .. } => {
                "Align trailing dimensions or use size-1 dimensions where broadcasting is intended"
            }
            Self::Arity { .. } => "Pass exactly two operands to binary elementwise operators",
            Self::UnknownType(_) => "Use one of the canonical C type names, e.g. float or int32_t",
            Self::UnknownOp(_) => "Use one of Add, Subtract, Multiply, Divide, Maximum, Minimum, Power",
            Self::NotAParameter(_) => "Only parameter nodes may be listed as graph parameters",
            Self::UnlistedParameter(_) => "Add every parameter the results depend on to the graph",
        }
    }
}
