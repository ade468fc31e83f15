#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use tessel_element as element;

#[doc(inline)]
pub use tessel_ir as ir;
