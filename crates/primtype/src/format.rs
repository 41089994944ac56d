//! Floating-point layout properties.
//!
//! Every float type is stored as a sign bit, a biased exponent and a trailing
//! significand field. Most properties come from a per-type table rather than a
//! formula: the FNUZ 8-bit formats reserve encodings differently from IEEE-754,
//! so their bias and exponent range cannot be derived from field widths alone.
//!
//! Calling any of these on a non-float type is a caller bug and panics, except
//! [`has_infinity`] which answers `false`.

use crate::PrimitiveType;
use crate::invariants;

/// How the exponent bias is obtained.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Bias {
    /// `2^(exponent_width - 1) - 1`.
    Ieee,
    /// Literal bias for formats that break the IEEE convention.
    Fixed(i32),
}

/// Per-type literal table row.
#[derive(Clone, Copy, Debug)]
struct Layout {
    significand_width: u32,
    underflow_exponent: i32,
    overflow_exponent: i32,
    bias: Bias,
    has_infinity: bool,
}

impl Layout {
    const fn ieee(
        significand_width: u32,
        underflow_exponent: i32,
        overflow_exponent: i32,
    ) -> Self {
        Self {
            significand_width,
            underflow_exponent,
            overflow_exponent,
            bias: Bias::Ieee,
            has_infinity: true,
        }
    }

    const fn finite(self) -> Self {
        Self {
            has_infinity: false,
            ..self
        }
    }

    const fn bias(self, bias: i32) -> Self {
        Self {
            bias: Bias::Fixed(bias),
            ..self
        }
    }
}

/// Table lookup. `None` for every non-float type.
///
/// Exponents use the `min_exponent`/`max_exponent` convention: `2^(e - 1)` is
/// the smallest normal (underflow) or the largest finite power (overflow).
fn layout(ty: PrimitiveType) -> Option<Layout> {
    use PrimitiveType as P;

    let layout = match ty {
        P::F64 => Layout::ieee(53, -1021, 1024),
        P::F32 => Layout::ieee(24, -125, 128),
        P::Bf16 => Layout::ieee(8, -125, 128),
        P::F16 => Layout::ieee(11, -13, 16),
        P::F8E5M2 => Layout::ieee(3, -13, 16),
        P::F8E4M3Fn => Layout::ieee(4, -5, 9).finite(),
        P::F8E4M3B11Fnuz => Layout::ieee(4, -9, 5).finite().bias(11),
        P::F8E5M2Fnuz => Layout::ieee(3, -14, 16).finite().bias(16),
        P::F8E4M3Fnuz => Layout::ieee(4, -6, 8).finite().bias(8),
        P::Invalid
        | P::Pred
        | P::S4
        | P::S8
        | P::S16
        | P::S32
        | P::S64
        | P::U4
        | P::U8
        | P::U16
        | P::U32
        | P::U64
        | P::C64
        | P::C128
        | P::Tuple
        | P::Opaque
        | P::Token => return None,
    };
    Some(layout)
}

fn expect_layout(ty: PrimitiveType) -> Layout {
    layout(ty).unwrap_or_else(|| invariants::not_floating(ty))
}

/// Bits of precision, including the implicit leading bit.
///
/// # Panics
/// Panics if `ty` is not a floating-point type.
pub fn significand_width(ty: PrimitiveType) -> u32 {
    expect_layout(ty).significand_width
}

/// Width of the biased exponent field.
///
/// # Panics
/// Panics if `ty` is not a floating-point type.
pub fn exponent_width(ty: PrimitiveType) -> u32 {
    // Sign bit plus the trailing significand field; the leading digit is implied.
    let trailing_significand_width = significand_width(ty) - 1;
    ty.bit_width() - (trailing_significand_width + 1)
}

/// Smallest `e` such that `2^(e - 1)` is a normal value.
///
/// # Panics
/// Panics if `ty` is not a floating-point type.
pub fn underflow_exponent(ty: PrimitiveType) -> i32 {
    expect_layout(ty).underflow_exponent
}

/// The exponent at which values stop being representable.
///
/// `2^(e - 1)` is still finite, `2^e` is not: this is one past the largest
/// exponent of a finite value.
///
/// # Panics
/// Panics if `ty` is not a floating-point type.
pub fn overflow_exponent(ty: PrimitiveType) -> i32 {
    expect_layout(ty).overflow_exponent
}

/// Constant subtracted from the stored exponent field.
///
/// # Panics
/// Panics if `ty` is not a floating-point type.
pub fn exponent_bias(ty: PrimitiveType) -> i32 {
    match expect_layout(ty).bias {
        Bias::Ieee => (1 << (exponent_width(ty) - 1)) - 1,
        Bias::Fixed(bias) => bias,
    }
}

/// Whether the type has an infinity encoding. `false` for non-float types.
pub fn has_infinity(ty: PrimitiveType) -> bool {
    layout(ty).is_some_and(|l| l.has_infinity)
}

/// Signed integer type of exactly `width` bits, or [`PrimitiveType::Invalid`].
pub fn signed_integral_type_for_bit_width(width: i64) -> PrimitiveType {
    match width {
        4 => PrimitiveType::S4,
        8 => PrimitiveType::S8,
        16 => PrimitiveType::S16,
        32 => PrimitiveType::S32,
        64 => PrimitiveType::S64,
        _ => PrimitiveType::Invalid,
    }
}

/// Unsigned integer type of exactly `width` bits, or [`PrimitiveType::Invalid`].
pub fn unsigned_integral_type_for_bit_width(width: i64) -> PrimitiveType {
    match width {
        4 => PrimitiveType::U4,
        8 => PrimitiveType::U8,
        16 => PrimitiveType::U16,
        32 => PrimitiveType::U32,
        64 => PrimitiveType::U64,
        _ => PrimitiveType::Invalid,
    }
}

/// All layout properties of one floating-point type.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FloatFormat {
    pub ty: PrimitiveType,
    pub bit_width: u32,
    pub significand_width: u32,
    pub exponent_width: u32,
    pub exponent_bias: i32,
    pub underflow_exponent: i32,
    pub overflow_exponent: i32,
    pub has_infinity: bool,
}

impl FloatFormat {
    /// Collect the properties of `ty`, or `None` if it is not a float type.
    pub fn of(ty: PrimitiveType) -> Option<Self> {
        layout(ty)?;
        Some(Self {
            ty,
            bit_width: ty.bit_width(),
            significand_width: significand_width(ty),
            exponent_width: exponent_width(ty),
            exponent_bias: exponent_bias(ty),
            underflow_exponent: underflow_exponent(ty),
            overflow_exponent: overflow_exponent(ty),
            has_infinity: has_infinity(ty),
        })
    }

    /// Bits stored in the significand field (precision minus the implied bit).
    pub fn trailing_significand_width(&self) -> u32 {
        self.significand_width - 1
    }
}

/// Formats of every floating-point type, in declaration order.
pub fn float_formats() -> impl Iterator<Item = FloatFormat> {
    PrimitiveType::ALL.iter().copied().filter_map(FloatFormat::of)
}
