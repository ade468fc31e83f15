use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::ElementTypeError;

/// The scalar kind of every value stored in a tensor.
///
/// An `ElementType` is an immutable value. Two instances are equal when all four fields match,
/// regardless of where they were constructed.
///
/// # Ordering
///
/// Element types are totally ordered by [`ElementType::order_key`]: wider types sort after
/// narrower ones, and at equal bit width real types sort after integer types and signed after
/// unsigned. Types that share a key but differ in name (`char` and `int8_t`) are ordered by name.
///
/// # Examples
///
/// ```rust
/// use tessel_element::{ElementType, F32, I8, I32, U32};
///
/// let t = ElementType::new(32, true, true, "float");
/// assert_eq!(t, F32);
/// assert_eq!(t.size(), 4);
///
/// assert!(I8 < F32);
/// assert!(U32 < I32);
/// ```
///
/// `ElementType::default()` is the empty type `(0, false, false, "")`, which matches no
/// canonical instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementType {
    bitwidth: usize,
    is_real: bool,
    is_signed: bool,
    c_type: Cow<'static, str>,
}

impl ElementType {
    /// Creates a new element type.
    ///
    /// The fields are stored verbatim; `c_type` is not checked against the canonical table.
    ///
    /// # Arguments
    ///
    /// * `bitwidth` - The number of bits of precision.
    /// * `is_real` - `true` for floating point types.
    /// * `is_signed` - `true` for signed types.
    /// * `c_type` - The canonical textual designator, e.g. `"float"`.
    pub fn new(
        bitwidth: usize,
        is_real: bool,
        is_signed: bool,
        c_type: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            bitwidth,
            is_real,
            is_signed,
            c_type: c_type.into(),
        }
    }

    /// Creates a new element type from a static name in a const context.
    pub const fn from_static(
        bitwidth: usize,
        is_real: bool,
        is_signed: bool,
        c_type: &'static str,
    ) -> Self {
        Self {
            bitwidth,
            is_real,
            is_signed,
            c_type: Cow::Borrowed(c_type),
        }
    }

    /// The number of bits of precision.
    #[inline]
    pub fn bitwidth(&self) -> usize {
        self.bitwidth
    }

    /// Whether the type is floating point.
    #[inline]
    pub fn is_real(&self) -> bool {
        self.is_real
    }

    /// Whether the type is signed.
    #[inline]
    pub fn is_signed(&self) -> bool {
        self.is_signed
    }

    /// The canonical C type name, e.g. `"int32_t"`.
    #[inline]
    pub fn c_type_string(&self) -> &str {
        &self.c_type
    }

    /// Returns the number of bytes needed to store one element, `ceil(bitwidth / 8)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tessel_element::{ElementType, BOOLEAN, F64};
    ///
    /// assert_eq!(BOOLEAN.size(), 1);
    /// assert_eq!(F64.size(), 8);
    /// assert_eq!(ElementType::new(12, false, false, "uint12").size(), 2);
    /// ```
    #[inline]
    pub fn size(&self) -> usize {
        self.bitwidth.div_ceil(8)
    }

    /// The composite ordering key `(bitwidth << 2) | (is_real ? 2 : 0) | (is_signed ? 1 : 0)`.
    ///
    /// Intended for building ordered dispatch tables over element types. The key is widened to
    /// `u128` so the shift cannot drop high bits of any `usize` bitwidth.
    pub fn order_key(&self) -> u128 {
        ((self.bitwidth as u128) << 2)
            | (if self.is_real { 2 } else { 0 })
            | u128::from(self.is_signed)
    }

    /// Returns `true` if this value equals one of the canonical instances.
    pub fn is_canonical(&self) -> bool {
        crate::canonical::CANONICAL_TYPES
            .iter()
            .any(|canonical| *canonical == self)
    }
}

impl Ord for ElementType {
    fn cmp(&self, other: &Self) -> Ordering {
        // lexicographic on (bitwidth, is_real, is_signed) is the same order as `order_key`
        (self.bitwidth, self.is_real, self.is_signed)
            .cmp(&(other.bitwidth, other.is_real, other.is_signed))
            .then_with(|| self.c_type.cmp(&other.c_type))
    }
}

impl PartialOrd for ElementType {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "element::Type({}, {}, {})",
            self.bitwidth,
            u8::from(self.is_real),
            u8::from(self.is_signed)
        )
    }
}

impl FromStr for ElementType {
    type Err = ElementTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::canonical::from_name(s).cloned()
    }
}
