use crate::canonical::{BOOLEAN, F32, F64, I16, I32, I64, I8, U16, U32, U64, U8};
use crate::element_type::ElementType;

/// Host primitive types with a canonical element type.
///
/// Only the fixed set of primitives below implements this trait, so asking for the element type
/// of anything else is a compile error.
pub trait NativeType: Copy + Send + Sync + 'static {
    /// The canonical element type of `Self`.
    fn element_type() -> &'static ElementType;
}

macro_rules! impl_native_type {
    ($($ty:ty => $canonical:ident),+ $(,)?) => {
        $(
            impl NativeType for $ty {
                #[inline]
                fn element_type() -> &'static ElementType {
                    &$canonical
                }
            }
        )+
    };
}

impl_native_type!(
    bool => BOOLEAN,
    f32 => F32,
    f64 => F64,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
);

/// Returns the canonical element type of the host type `T`.
///
/// # Example
///
/// ```rust
/// use tessel_element::{from_type, BOOLEAN, U64};
///
/// assert_eq!(from_type::<bool>(), &BOOLEAN);
/// assert_eq!(from_type::<u64>(), &U64);
/// ```
#[inline]
pub fn from_type<T: NativeType>() -> &'static ElementType {
    T::element_type()
}
