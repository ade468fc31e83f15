/// Shape compatibility rule applied by binary elementwise operators.
///
/// # Examples
///
/// ```rust
/// use tessel_ir::{AutoBroadcast, Shape};
///
/// let a = Shape::new([4, 4]);
/// let b = Shape::new([1, 4]);
/// assert_eq!(AutoBroadcast::Numpy.resolve(&a, &b), Some(Shape::new([4, 4])));
/// assert_eq!(AutoBroadcast::None.resolve(&a, &b), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AutoBroadcast {
    /// Operand shapes must be identical.
    None,
    /// Shapes are aligned from the trailing dimension and size-1 dimensions stretch.
    #[default]
    Numpy,
}

impl AutoBroadcast {
    /// Returns the result shape of combining `lhs` and `rhs`, or `None` if they are incompatible.
    pub fn resolve(&self, lhs: &crate::Shape, rhs: &crate::Shape) -> Option<crate::Shape> {
        match self {
            AutoBroadcast::None => (lhs == rhs).then(|| lhs.clone()),
            AutoBroadcast::Numpy => lhs.broadcast(rhs),
        }
    }
}
