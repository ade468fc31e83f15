use std::fmt;

/// The dimensions of a tensor. A shape of rank 0 is a scalar.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shape(Vec<usize>);

impl Shape {
    /// Creates a new shape from dimensions.
    pub fn new(dims: impl Into<Vec<usize>>) -> Self {
        Shape(dims.into())
    }

    /// Creates a scalar shape.
    pub fn scalar() -> Self {
        Shape(Vec::new())
    }

    /// Returns the dimensions as a slice.
    #[inline]
    pub fn dims(&self) -> &[usize] {
        &self.0
    }

    /// Returns the number of dimensions.
    #[inline]
    pub fn rank(&self) -> usize {
        self.0.len()
    }

    /// Returns true if this is a scalar.
    #[inline]
    pub fn is_scalar(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the total number of elements, or `None` if the product overflows `usize`.
    pub fn numel(&self) -> Option<usize> {
        self.0
            .iter()
            .try_fold(1usize, |acc, &dim| acc.checked_mul(dim))
    }

    /// Computes the broadcast shape of `self` and `other`.
    ///
    /// Shapes are aligned from the trailing dimension; missing leading dimensions count as 1.
    /// Two dimensions are compatible when they are equal or one of them is 1, in which case the
    /// result takes the other one.
    ///
    /// # Returns
    ///
    /// The broadcast shape, or `None` if some pair of dimensions is incompatible.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tessel_ir::Shape;
    ///
    /// let a = Shape::new([4, 4]);
    /// assert_eq!(a.broadcast(&Shape::new([1, 4])), Some(Shape::new([4, 4])));
    /// assert_eq!(a.broadcast(&Shape::new([4])), Some(Shape::new([4, 4])));
    /// assert_eq!(a.broadcast(&Shape::new([3, 4])), None);
    /// ```
    pub fn broadcast(&self, other: &Shape) -> Option<Shape> {
        let rank = self.rank().max(other.rank());
        let lhs = std::iter::repeat(1)
            .take(rank - self.rank())
            .chain(self.0.iter().copied());
        let rhs = std::iter::repeat(1)
            .take(rank - other.rank())
            .chain(other.0.iter().copied());

        lhs.zip(rhs)
            .map(|(a, b)| match (a, b) {
                (a, b) if a == b => Some(a),
                (1, b) => Some(b),
                (a, 1) => Some(a),
                _ => None,
            })
            .collect::<Option<Vec<_>>>()
            .map(Shape)
    }
}

impl From<Vec<usize>> for Shape {
    fn from(dims: Vec<usize>) -> Self {
        Shape(dims)
    }
}

impl<const N: usize> From<[usize; N]> for Shape {
    fn from(dims: [usize; N]) -> Self {
        Shape(dims.to_vec())
    }
}

impl From<&[usize]> for Shape {
    fn from(dims: &[usize]) -> Self {
        Shape(dims.to_vec())
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}
