#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Format introspection for numeric primitive element types.
//!
//! Two independent pieces share the closed [`PrimitiveType`] enumeration:
//! - **Format properties** ([`format`]): pure functions deriving the IEEE-754
//!   style layout of each floating-point type (significand and exponent widths,
//!   bias, normal exponent range, infinity support).
//! - **Names** ([`names`]): the canonical lowercase spelling of each type and the
//!   reverse lookup used when parsing textual IR or configuration.
//!
//! # Example
//!
//! ```
//! use primtype::{PrimitiveType, exponent_bias, string_to_primitive_type};
//!
//! let ty = string_to_primitive_type("f32").unwrap();
//! assert_eq!(ty, PrimitiveType::F32);
//! assert_eq!(exponent_bias(ty), 127);
//! assert_eq!(ty.to_string(), "f32");
//! ```

pub mod dump;
mod error;
pub mod format;
mod invariants;
pub mod names;
mod primitive_type;
#[cfg(feature = "serde")]
mod serde_impl;

#[cfg(test)]
mod format_tests;

pub use dump::dump_float_formats;
pub use error::{Error, ErrorKind, Result};
pub use format::{
    FloatFormat, exponent_bias, exponent_width, float_formats, has_infinity, overflow_exponent,
    signed_integral_type_for_bit_width, significand_width, underflow_exponent,
    unsigned_integral_type_for_bit_width,
};
pub use names::{
    NAME_OVERRIDES, is_primitive_type_name, lowercase_name, lowercase_name_for_tag,
    primitive_type_names, string_to_primitive_type,
};
pub use primitive_type::PrimitiveType;
