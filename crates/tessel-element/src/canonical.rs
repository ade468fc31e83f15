use crate::element_type::ElementType;
use crate::error::ElementTypeError;

/// Boolean, stored at 8 bits.
pub static BOOLEAN: ElementType = ElementType::from_static(8, false, true, "char");
/// 32-bit IEEE-754 floating point.
pub static F32: ElementType = ElementType::from_static(32, true, true, "float");
/// 64-bit IEEE-754 floating point.
pub static F64: ElementType = ElementType::from_static(64, true, true, "double");
/// 8-bit signed integer.
pub static I8: ElementType = ElementType::from_static(8, false, true, "int8_t");
/// 16-bit signed integer.
pub static I16: ElementType = ElementType::from_static(16, false, true, "int16_t");
/// 32-bit signed integer.
pub static I32: ElementType = ElementType::from_static(32, false, true, "int32_t");
/// 64-bit signed integer.
pub static I64: ElementType = ElementType::from_static(64, false, true, "int64_t");
/// 8-bit unsigned integer.
pub static U8: ElementType = ElementType::from_static(8, false, false, "uint8_t");
/// 16-bit unsigned integer.
pub static U16: ElementType = ElementType::from_static(16, false, false, "uint16_t");
/// 32-bit unsigned integer.
pub static U32: ElementType = ElementType::from_static(32, false, false, "uint32_t");
/// 64-bit unsigned integer.
pub static U64: ElementType = ElementType::from_static(64, false, false, "uint64_t");

/// The canonical element types, in declaration order.
///
/// This table is the only source for name-indexed lookup.
pub static CANONICAL_TYPES: [&ElementType; 11] =
    [&BOOLEAN, &F32, &F64, &I8, &I16, &I32, &I64, &U8, &U16, &U32, &U64];

/// Returns the canonical element types as a slice.
pub fn canonical_types() -> &'static [&'static ElementType] {
    &CANONICAL_TYPES
}

/// Looks up a canonical element type by its C type name.
///
/// # Arguments
///
/// * `name` - One of `char`, `float`, `double`, `int8_t`, `int16_t`, `int32_t`, `int64_t`,
///   `uint8_t`, `uint16_t`, `uint32_t` or `uint64_t`.
///
/// # Returns
///
/// The canonical instance with that name.
///
/// # Errors
///
/// Returns [`ElementTypeError::UnknownType`] for any other string, including case variants.
///
/// # Example
///
/// ```rust
/// use tessel_element::{from_name, ElementTypeError, U16};
///
/// assert_eq!(from_name("uint16_t"), Ok(&U16));
/// assert_eq!(
///     from_name("unsigned_long_long"),
///     Err(ElementTypeError::UnknownType("unsigned_long_long".to_string()))
/// );
/// ```
pub fn from_name(name: &str) -> Result<&'static ElementType, ElementTypeError> {
    CANONICAL_TYPES
        .iter()
        .copied()
        .find(|t| t.c_type_string() == name)
        .ok_or_else(|| ElementTypeError::UnknownType(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_definitions() {
        let expected = [
            ("char", 8, false, true),
            ("float", 32, true, true),
            ("double", 64, true, true),
            ("int8_t", 8, false, true),
            ("int16_t", 16, false, true),
            ("int32_t", 32, false, true),
            ("int64_t", 64, false, true),
            ("uint8_t", 8, false, false),
            ("uint16_t", 16, false, false),
            ("uint32_t", 32, false, false),
            ("uint64_t", 64, false, false),
        ];
        assert_eq!(canonical_types().len(), expected.len());
        for (t, (name, bits, real, signed)) in canonical_types().iter().zip(expected) {
            assert_eq!(t.c_type_string(), name);
            assert_eq!(t.bitwidth(), bits);
            assert_eq!(t.is_real(), real);
            assert_eq!(t.is_signed(), signed);
        }
    }

    #[test]
    fn round_trip_by_name() -> Result<(), ElementTypeError> {
        for t in canonical_types() {
            assert_eq!(from_name(t.c_type_string())?, *t);
        }
        Ok(())
    }

    #[test]
    fn lookup_returns_canonical_instance() -> Result<(), ElementTypeError> {
        assert!(std::ptr::eq(from_name("float")?, &F32));
        Ok(())
    }

    #[test]
    fn unknown_names() {
        for name in [
            "unsigned_long_long",
            "",
            "Float",
            "FLOAT",
            "int",
            "bool",
            "f32",
            " float",
            "int32_t ",
        ] {
            assert_eq!(
                from_name(name),
                Err(ElementTypeError::UnknownType(name.to_string()))
            );
        }
    }

    #[test]
    fn names_are_unique() {
        let mut names: Vec<_> = canonical_types().iter().map(|t| t.c_type_string()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), CANONICAL_TYPES.len());
    }
}
