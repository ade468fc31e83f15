use std::fmt;
use std::str::FromStr;

use crate::config::AutoBroadcast;
use crate::error::GraphError;
use crate::node::{Node, NodeRef};
use crate::op::binary_elementwise::validate_binary_elementwise;
use crate::op::Op;

/// A binary elementwise arithmetic function.
///
/// The variants are labels only: every operator is validated by
/// [`validate_binary_elementwise`] and produces a node of the operands' element type and
/// broadcast shape. The numeric function is left to an execution backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ArithmeticOp {
    /// `a + b`
    Add,
    /// `a - b`
    Subtract,
    /// `a * b`
    Multiply,
    /// `a / b`
    Divide,
    /// The larger of `a` and `b`.
    Maximum,
    /// The smaller of `a` and `b`.
    Minimum,
    /// `a` raised to the power `b`.
    Power,
}

impl ArithmeticOp {
    /// Every arithmetic operator.
    pub const ALL: [ArithmeticOp; 7] = [
        ArithmeticOp::Add,
        ArithmeticOp::Subtract,
        ArithmeticOp::Multiply,
        ArithmeticOp::Divide,
        ArithmeticOp::Maximum,
        ArithmeticOp::Minimum,
        ArithmeticOp::Power,
    ];

    /// Number of operands of every binary operator.
    pub const ARITY: usize = 2;

    /// The operator name, e.g. `"Minimum"`.
    pub fn name(self) -> &'static str {
        match self {
            ArithmeticOp::Add => "Add",
            ArithmeticOp::Subtract => "Subtract",
            ArithmeticOp::Multiply => "Multiply",
            ArithmeticOp::Divide => "Divide",
            ArithmeticOp::Maximum => "Maximum",
            ArithmeticOp::Minimum => "Minimum",
            ArithmeticOp::Power => "Power",
        }
    }

    /// Builds a node applying this operator to `lhs` and `rhs` with the default broadcasting.
    pub fn build(self, lhs: &NodeRef, rhs: &NodeRef) -> Result<NodeRef, GraphError> {
        self.build_with(lhs, rhs, AutoBroadcast::default())
    }

    /// Builds a node applying this operator to `lhs` and `rhs`.
    ///
    /// # Errors
    ///
    /// Propagates the error of [`validate_binary_elementwise`] unchanged. No node is created on
    /// failure.
    pub fn build_with(
        self,
        lhs: &NodeRef,
        rhs: &NodeRef,
        broadcast: AutoBroadcast,
    ) -> Result<NodeRef, GraphError> {
        let (element_type, shape) = validate_binary_elementwise(lhs, rhs, broadcast)?;
        Ok(Node::new(
            Op::Arithmetic {
                kind: self,
                broadcast,
            },
            vec![lhs.clone(), rhs.clone()],
            element_type,
            shape,
        ))
    }

    /// Builds a node from an operand list of any length.
    ///
    /// This is the generic construction path used by callers that cannot express the operand
    /// count in a signature.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Arity`] unless exactly two operands are given, otherwise the same
    /// errors as [`ArithmeticOp::build`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use tessel_element::F32;
    /// use tessel_ir::{op, ArithmeticOp, GraphError};
    ///
    /// let a = op::parameter(F32.clone(), [3]);
    /// let err = ArithmeticOp::Minimum.build_from(&[a.clone()]).unwrap_err();
    /// assert_eq!(
    ///     err,
    ///     GraphError::Arity { op: ArithmeticOp::Minimum, expected: 2, actual: 1 }
    /// );
    /// assert!(ArithmeticOp::Minimum.build_from(&[a.clone(), a]).is_ok());
    /// ```
    pub fn build_from(self, inputs: &[NodeRef]) -> Result<NodeRef, GraphError> {
        match inputs {
            [lhs, rhs] => self.build(lhs, rhs),
            _ => Err(GraphError::Arity {
                op: self,
                expected: Self::ARITY,
                actual: inputs.len(),
            }),
        }
    }
}

impl fmt::Display for ArithmeticOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ArithmeticOp {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| GraphError::UnknownOp(s.to_string()))
    }
}

macro_rules! binary_arithmetic {
    ($($(#[$meta:meta])* $fn_name:ident => $variant:ident),+ $(,)?) => {
        $(
            $(#[$meta])*
            pub fn $fn_name(lhs: &NodeRef, rhs: &NodeRef) -> Result<NodeRef, GraphError> {
                ArithmeticOp::$variant.build(lhs, rhs)
            }
        )+
    };
}

binary_arithmetic!(
    /// Elementwise sum of two nodes.
    add => Add,
    /// Elementwise difference of two nodes.
    subtract => Subtract,
    /// Elementwise product of two nodes.
    multiply => Multiply,
    /// Elementwise quotient of two nodes.
    divide => Divide,
    /// Elementwise maximum of two nodes.
    maximum => Maximum,
    /// Elementwise minimum of two nodes.
    ///
    /// The result holds, for each coordinate, the smaller of the two operand values at that
    /// coordinate after broadcasting.
    ///
    /// # Errors
    ///
    /// * [`GraphError::TypeMismatch`] if the operands have different element types.
    /// * [`GraphError::ShapeMismatch`] if the operand shapes cannot be broadcast.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tessel_element::F32;
    /// use tessel_ir::{op, Shape};
    ///
    /// let a = op::parameter(F32.clone(), [4, 4]);
    /// let b = op::parameter(F32.clone(), [4, 4]);
    /// let min = op::minimum(&a, &b).unwrap();
    /// assert_eq!(min.description(), "Minimum");
    /// assert_eq!(min.shape(), &Shape::new([4, 4]));
    /// ```
    minimum => Minimum,
    /// Elementwise power of two nodes.
    power => Power,
);
