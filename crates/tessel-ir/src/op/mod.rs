/// Concrete binary elementwise arithmetic operators.
pub mod arithmetic;

/// The validation rule shared by all binary elementwise arithmetic operators.
pub mod binary_elementwise;

/// Graph input nodes.
pub mod parameter;

pub use arithmetic::{add, divide, maximum, minimum, multiply, power, subtract, ArithmeticOp};
pub use binary_elementwise::validate_binary_elementwise;
pub use parameter::parameter;

use crate::config::AutoBroadcast;

/// The semantic label attached to a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// A graph input.
    Parameter,
    /// A binary elementwise arithmetic operator.
    Arithmetic {
        /// The arithmetic function.
        kind: ArithmeticOp,
        /// The shape rule the operands were validated with.
        broadcast: AutoBroadcast,
    },
}

impl Op {
    /// The operator name, e.g. `"Parameter"` or `"Minimum"`.
    pub fn name(&self) -> &'static str {
        match self {
            Op::Parameter => "Parameter",
            Op::Arithmetic { kind, .. } => kind.name(),
        }
    }

    /// Returns `true` for graph inputs.
    pub fn is_parameter(&self) -> bool {
        matches!(self, Op::Parameter)
    }
}
