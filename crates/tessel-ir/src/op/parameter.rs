use tessel_element::ElementType;

use crate::node::{Node, NodeRef};
use crate::op::Op;
use crate::shape::Shape;

/// Creates a graph input of the given element type and shape.
///
/// Parameters have no inputs, so construction always succeeds.
///
/// # Example
///
/// ```rust
/// use tessel_element::U8;
/// use tessel_ir::{op, Shape};
///
/// let image = op::parameter(U8.clone(), [480, 640, 3]);
/// assert!(image.op().is_parameter());
/// assert!(image.inputs().is_empty());
/// assert_eq!(image.shape(), &Shape::new([480, 640, 3]));
/// ```
pub fn parameter(element_type: ElementType, shape: impl Into<Shape>) -> NodeRef {
    Node::new(Op::Parameter, Vec::new(), element_type, shape.into())
}

#[cfg(test)]
mod tests {
    use super::parameter;
    use crate::Shape;
    use tessel_element::{ElementType, F64};

    #[test]
    fn scalar_parameter() {
        let p = parameter(F64.clone(), Shape::scalar());
        assert!(p.shape().is_scalar());
        assert_eq!(p.element_type(), &F64);
        assert_eq!(p.description(), "Parameter");
    }

    #[test]
    fn non_canonical_parameter() {
        let half = ElementType::new(16, true, true, "half");
        let p = parameter(half.clone(), [8]);
        assert_eq!(p.element_type(), &half);
    }
}
