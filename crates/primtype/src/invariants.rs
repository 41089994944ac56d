//! Contract violations excluded from coverage reports.
//!
//! Each of these marks a bug in the caller, not bad input, so they panic
//! instead of returning an error.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::PrimitiveType;

#[cold]
pub(crate) fn not_floating(ty: PrimitiveType) -> ! {
    panic!("not a floating data type: {ty:?} (tag {})", ty.as_i32())
}

#[cold]
pub(crate) fn no_bit_width(ty: PrimitiveType) -> ! {
    panic!("{ty:?} (tag {}) has no bit width", ty.as_i32())
}

#[cold]
pub(crate) fn not_complex(ty: PrimitiveType) -> ! {
    panic!("not a complex data type: {ty:?} (tag {})", ty.as_i32())
}

#[cold]
pub(crate) fn tag_out_of_range(tag: i32) -> ! {
    panic!(
        "primitive type tag {tag} out of range (expected 0..{})",
        PrimitiveType::ARRAY_SIZE
    )
}
