//! The closed set of primitive element types.
//!
//! Tags follow the XLA `PrimitiveType` numbering so they survive a trip through
//! serialized IR unchanged. New variants get the next free tag; existing tags
//! never move.

use crate::invariants;

macro_rules! define_primitive_types {
    (
        $(
            $(#[$meta:meta])*
            $variant:ident = $tag:literal => $ident:literal
        ),* $(,)?
    ) => {
        /// Primitive element type tag.
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[repr(i32)]
        pub enum PrimitiveType {
            $(
                $(#[$meta])*
                $variant = $tag,
            )*
        }

        impl PrimitiveType {
            /// Every variant, in declaration order.
            pub const ALL: &'static [PrimitiveType] = &[$(Self::$variant),*];

            /// One past the largest tag.
            pub const ARRAY_SIZE: usize = {
                let tags = [$($tag),*];
                let mut max = 0;
                let mut i = 0;
                while i < tags.len() {
                    if tags[i] > max {
                        max = tags[i];
                    }
                    i += 1;
                }
                max as usize + 1
            };

            /// Convert from raw tag.
            pub fn from_i32(tag: i32) -> Option<Self> {
                match tag {
                    $($tag => Some(Self::$variant),)*
                    _ => None,
                }
            }

            /// The identifier this type is declared under, e.g. `F8E4M3FN`.
            ///
            /// Canonical names are derived from this text; see [`crate::names`].
            pub fn identifier(self) -> &'static str {
                match self {
                    $(Self::$variant => $ident,)*
                }
            }
        }
    };
}

define_primitive_types! {
    /// Sentinel for "no type". Returned by total lookups that found nothing.
    Invalid = 0 => "PRIMITIVE_TYPE_INVALID",
    /// Predicate (boolean).
    Pred = 1 => "PRED",

    S4 = 21 => "S4",
    S8 = 2 => "S8",
    S16 = 3 => "S16",
    S32 = 4 => "S32",
    S64 = 5 => "S64",

    U4 = 22 => "U4",
    U8 = 6 => "U8",
    U16 = 7 => "U16",
    U32 = 8 => "U32",
    U64 = 9 => "U64",

    /// IEEE half precision.
    F16 = 10 => "F16",
    /// IEEE single precision.
    F32 = 11 => "F32",
    /// Truncated single precision: f32's exponent range, 8 bits of precision.
    Bf16 = 16 => "BF16",
    /// IEEE double precision.
    F64 = 12 => "F64",

    /// 8-bit float, 5 exponent bits, 2 mantissa bits, IEEE conventions.
    F8E5M2 = 19 => "F8E5M2",
    /// 8-bit float, 4 exponent bits, 3 mantissa bits, finite (NaN but no infinity).
    F8E4M3Fn = 20 => "F8E4M3FN",
    /// Like `F8E4M3Fnuz` but with exponent bias 11.
    F8E4M3B11Fnuz = 23 => "F8E4M3B11FNUZ",
    /// 8-bit float, 5 exponent bits, finite, unsigned zero, bias 16.
    F8E5M2Fnuz = 24 => "F8E5M2FNUZ",
    /// 8-bit float, 4 exponent bits, finite, unsigned zero, bias 8.
    F8E4M3Fnuz = 25 => "F8E4M3FNUZ",

    /// Complex of two f32 components.
    C64 = 15 => "C64",
    /// Complex of two f64 components.
    C128 = 18 => "C128",

    Tuple = 13 => "TUPLE",
    /// Black-box value. Declared as `OPAQUE_TYPE`, canonically named `opaque`.
    Opaque = 14 => "OPAQUE_TYPE",
    /// Ordering token threaded through side-effecting operations.
    Token = 17 => "TOKEN",
}

impl PrimitiveType {
    /// Raw tag.
    #[inline]
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Whether `tag` names a variant.
    pub fn is_valid(tag: i32) -> bool {
        Self::from_i32(tag).is_some()
    }

    /// Total storage width in bits.
    ///
    /// # Panics
    /// Panics for types without a fixed storage size (`Invalid`, `Tuple`,
    /// `Opaque`, `Token`).
    pub fn bit_width(self) -> u32 {
        match self {
            Self::Pred => 1,
            Self::S4 | Self::U4 => 4,
            Self::S8
            | Self::U8
            | Self::F8E5M2
            | Self::F8E4M3Fn
            | Self::F8E4M3B11Fnuz
            | Self::F8E5M2Fnuz
            | Self::F8E4M3Fnuz => 8,
            Self::S16 | Self::U16 | Self::F16 | Self::Bf16 => 16,
            Self::S32 | Self::U32 | Self::F32 => 32,
            Self::S64 | Self::U64 | Self::F64 | Self::C64 => 64,
            Self::C128 => 128,
            Self::Invalid | Self::Tuple | Self::Opaque | Self::Token => {
                invariants::no_bit_width(self)
            }
        }
    }

    /// Storage width in whole bytes (sub-byte types round up).
    ///
    /// # Panics
    /// Same as [`bit_width`](Self::bit_width).
    pub fn byte_width(self) -> u32 {
        self.bit_width().div_ceil(8)
    }

    pub fn is_floating_point(self) -> bool {
        matches!(self, Self::F16 | Self::F32 | Self::Bf16 | Self::F64) || self.is_f8()
    }

    /// Whether this is one of the 8-bit float formats.
    pub fn is_f8(self) -> bool {
        matches!(
            self,
            Self::F8E5M2
                | Self::F8E4M3Fn
                | Self::F8E4M3B11Fnuz
                | Self::F8E5M2Fnuz
                | Self::F8E4M3Fnuz
        )
    }

    pub fn is_complex(self) -> bool {
        matches!(self, Self::C64 | Self::C128)
    }

    pub fn is_signed_integral(self) -> bool {
        matches!(self, Self::S4 | Self::S8 | Self::S16 | Self::S32 | Self::S64)
    }

    pub fn is_unsigned_integral(self) -> bool {
        matches!(self, Self::U4 | Self::U8 | Self::U16 | Self::U32 | Self::U64)
    }

    pub fn is_integral(self) -> bool {
        self.is_signed_integral() || self.is_unsigned_integral()
    }

    /// Whether values of this type can be array elements.
    pub fn is_array_type(self) -> bool {
        !matches!(self, Self::Invalid | Self::Tuple | Self::Opaque | Self::Token)
    }

    /// Element type of one component of a complex type.
    ///
    /// # Panics
    /// Panics if `self` is not complex.
    pub fn complex_component_type(self) -> Self {
        match self {
            Self::C64 => Self::F32,
            Self::C128 => Self::F64,
            _ => invariants::not_complex(self),
        }
    }
}
