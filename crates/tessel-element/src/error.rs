use thiserror::Error;

/// An error type for element type lookup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ElementTypeError {
    /// The textual designator does not name any canonical element type.
    ///
    /// Matching is exact: case variants and synonyms such as `"Float"` or `"int"` are rejected.
    #[error("Unknown C type '{0}': expected one of char, float, double, int8_t, int16_t, int32_t, int64_t, uint8_t, uint16_t, uint32_t, uint64_t")]
    UnknownType(String),
}
