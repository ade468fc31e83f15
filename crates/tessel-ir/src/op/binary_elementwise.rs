use tessel_element::ElementType;

use crate::config::AutoBroadcast;
use crate::error::GraphError;
use crate::node::Node;
use crate::shape::Shape;

/// Validates the operands of a binary elementwise arithmetic operator.
///
/// The operands must share the same element type, and their shapes must be compatible under
/// `broadcast`. All checks run before any node is created.
///
/// # Arguments
///
/// * `lhs` - The left operand.
/// * `rhs` - The right operand.
/// * `broadcast` - The shape compatibility rule.
///
/// # Returns
///
/// The element type and shape of the result.
///
/// # Errors
///
/// * [`GraphError::TypeMismatch`] if the element types differ.
/// * [`GraphError::ShapeMismatch`] if the shapes are incompatible.
pub fn validate_binary_elementwise(
    lhs: &Node,
    rhs: &Node,
    broadcast: AutoBroadcast,
) -> Result<(ElementType, Shape), GraphError> {
    if lhs.element_type() != rhs.element_type() {
        log::debug!(
            "element type mismatch between {} and {}",
            lhs.name(),
            rhs.name()
        );
        return Err(GraphError::TypeMismatch {
            lhs: lhs.element_type().clone(),
            rhs: rhs.element_type().clone(),
        });
    }

    let Some(shape) = broadcast.resolve(lhs.shape(), rhs.shape()) else {
        log::debug!(
            "shape mismatch between {} {} and {} {} ({:?})",
            lhs.name(),
            lhs.shape(),
            rhs.name(),
            rhs.shape(),
            broadcast
        );
        return Err(GraphError::ShapeMismatch {
            lhs: lhs.shape().clone(),
            rhs: rhs.shape().clone(),
        });
    };

    Ok((lhs.element_type().clone(), shape))
}
