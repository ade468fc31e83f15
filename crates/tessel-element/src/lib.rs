#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Overview
//!
//! Every value flowing through a tessel graph has an [`ElementType`]: the scalar kind stored at
//! each coordinate of a tensor. An element type is a plain immutable value described by its bit
//! width, whether it is real (floating point) or integral, whether it is signed, and a canonical
//! C type name.
//!
//! A fixed set of canonical instances ([`BOOLEAN`], [`F32`], [`F64`], [`I8`] .. [`U64`]) lives
//! for the whole process. Operators only ever reference these, although the type itself allows
//! other constructions.
//!
//! # Lookup
//!
//! ```rust
//! use tessel_element::{from_name, from_type, ElementType, F32, I32};
//!
//! assert_eq!(from_type::<f32>(), &F32);
//! assert_eq!(from_name("int32_t").unwrap(), &I32);
//! assert!(from_name("unsigned_long_long").is_err());
//!
//! let parsed: ElementType = "float".parse().unwrap();
//! assert_eq!(parsed, F32);
//! assert_eq!(parsed.to_string(), "element::Type(32, 1, 1)");
//! ```

/// Canonical element type table and name-indexed lookup.
///
/// Holds the process-wide instances and [`canonical::from_name`].
pub mod canonical;

/// Error types for element type lookup.
pub mod error;

/// The [`ElementType`] value type.
pub mod element_type;

/// Type-indexed lookup of canonical element types.
///
/// Maps host primitive types to their canonical [`ElementType`] through [`NativeType`].
pub mod native;

pub use crate::canonical::{
    canonical_types, from_name, BOOLEAN, CANONICAL_TYPES, F32, F64, I16, I32, I64, I8, U16, U32,
    U64, U8,
};
pub use crate::element_type::ElementType;
pub use crate::error::ElementTypeError;
pub use crate::native::{from_type, NativeType};
