use crate::PrimitiveType;
use crate::format::*;

fn floats() -> impl Iterator<Item = PrimitiveType> {
    PrimitiveType::ALL
        .iter()
        .copied()
        .filter(|ty| ty.is_floating_point())
}

#[test]
fn f32_layout() {
    assert_eq!(significand_width(PrimitiveType::F32), 24);
    assert_eq!(exponent_width(PrimitiveType::F32), 8);
    assert_eq!(exponent_bias(PrimitiveType::F32), 127);
    assert_eq!(underflow_exponent(PrimitiveType::F32), f32::MIN_EXP);
    assert_eq!(overflow_exponent(PrimitiveType::F32), f32::MAX_EXP);
}

#[test]
fn native_floats_match_std() {
    assert_eq!(significand_width(PrimitiveType::F64), f64::MANTISSA_DIGITS);
    assert_eq!(underflow_exponent(PrimitiveType::F64), f64::MIN_EXP);
    assert_eq!(overflow_exponent(PrimitiveType::F64), f64::MAX_EXP);
    assert_eq!(exponent_bias(PrimitiveType::F64), 1023);
    assert_eq!(significand_width(PrimitiveType::F32), f32::MANTISSA_DIGITS);
}

#[test]
fn bf16_shares_f32_exponent() {
    assert_eq!(significand_width(PrimitiveType::Bf16), 8);
    assert_eq!(exponent_width(PrimitiveType::Bf16), exponent_width(PrimitiveType::F32));
    assert_eq!(exponent_bias(PrimitiveType::Bf16), 127);
    assert_eq!(underflow_exponent(PrimitiveType::Bf16), -125);
    assert_eq!(overflow_exponent(PrimitiveType::Bf16), 128);
}

#[test]
fn widths_add_up_to_bit_width() {
    for ty in floats() {
        assert_eq!(
            exponent_width(ty) + (significand_width(ty) - 1) + 1,
            ty.bit_width(),
            "{ty:?}"
        );
    }
}

#[test]
fn standard_bias_follows_formula() {
    let standard = [
        PrimitiveType::F16,
        PrimitiveType::F32,
        PrimitiveType::Bf16,
        PrimitiveType::F64,
        PrimitiveType::F8E5M2,
        PrimitiveType::F8E4M3Fn,
    ];
    for ty in standard {
        assert_eq!(
            exponent_bias(ty),
            (1 << (exponent_width(ty) - 1)) - 1,
            "{ty:?}"
        );
    }
}

#[test]
fn fnuz_bias_overrides() {
    assert_eq!(exponent_bias(PrimitiveType::F8E4M3Fnuz), 8);
    assert_eq!(exponent_bias(PrimitiveType::F8E4M3B11Fnuz), 11);
    assert_eq!(exponent_bias(PrimitiveType::F8E5M2Fnuz), 16);

    // The formula would give 7, 7 and 15.
    assert_eq!(exponent_width(PrimitiveType::F8E4M3Fnuz), 4);
    assert_eq!(exponent_width(PrimitiveType::F8E4M3B11Fnuz), 4);
    assert_eq!(exponent_width(PrimitiveType::F8E5M2Fnuz), 5);
}

#[test]
fn f8_exponent_ranges() {
    let expected = [
        (PrimitiveType::F8E5M2, -13, 16),
        (PrimitiveType::F8E4M3Fn, -5, 9),
        (PrimitiveType::F8E4M3B11Fnuz, -9, 5),
        (PrimitiveType::F8E5M2Fnuz, -14, 16),
        (PrimitiveType::F8E4M3Fnuz, -6, 8),
    ];
    for (ty, emin, emax) in expected {
        assert_eq!(underflow_exponent(ty), emin, "{ty:?}");
        assert_eq!(overflow_exponent(ty), emax, "{ty:?}");
    }
}

#[test]
fn fnuz_underflow_tracks_bias() {
    // Smallest normal is 2^(1 - bias), so min_exponent is 2 - bias.
    for ty in [
        PrimitiveType::F8E4M3B11Fnuz,
        PrimitiveType::F8E5M2Fnuz,
        PrimitiveType::F8E4M3Fnuz,
    ] {
        assert_eq!(underflow_exponent(ty), 2 - exponent_bias(ty), "{ty:?}");
    }
}

#[test]
fn infinity() {
    assert!(has_infinity(PrimitiveType::F64));
    assert!(has_infinity(PrimitiveType::F32));
    assert!(has_infinity(PrimitiveType::F16));
    assert!(has_infinity(PrimitiveType::Bf16));
    assert!(has_infinity(PrimitiveType::F8E5M2));

    assert!(!has_infinity(PrimitiveType::F8E4M3Fn));
    assert!(!has_infinity(PrimitiveType::F8E4M3B11Fnuz));
    assert!(!has_infinity(PrimitiveType::F8E5M2Fnuz));
    assert!(!has_infinity(PrimitiveType::F8E4M3Fnuz));
}

#[test]
fn infinity_is_total() {
    for &ty in PrimitiveType::ALL {
        if !ty.is_floating_point() {
            assert!(!has_infinity(ty), "{ty:?}");
        }
    }
}

#[test]
fn signed_integral_for_width() {
    assert_eq!(signed_integral_type_for_bit_width(4), PrimitiveType::S4);
    assert_eq!(signed_integral_type_for_bit_width(8), PrimitiveType::S8);
    assert_eq!(signed_integral_type_for_bit_width(16), PrimitiveType::S16);
    assert_eq!(signed_integral_type_for_bit_width(32), PrimitiveType::S32);
    assert_eq!(signed_integral_type_for_bit_width(64), PrimitiveType::S64);

    for width in [0, 1, 3, 12, 128, -8] {
        assert_eq!(
            signed_integral_type_for_bit_width(width),
            PrimitiveType::Invalid
        );
    }
}

#[test]
fn unsigned_integral_for_width() {
    assert_eq!(unsigned_integral_type_for_bit_width(4), PrimitiveType::U4);
    assert_eq!(unsigned_integral_type_for_bit_width(64), PrimitiveType::U64);
    assert_eq!(
        unsigned_integral_type_for_bit_width(128),
        PrimitiveType::Invalid
    );
}

#[test]
fn integral_for_width_round_trips_bit_width() {
    for width in [4, 8, 16, 32, 64] {
        let signed = signed_integral_type_for_bit_width(width);
        let unsigned = unsigned_integral_type_for_bit_width(width);
        assert_eq!(i64::from(signed.bit_width()), width);
        assert_eq!(i64::from(unsigned.bit_width()), width);
        assert!(signed.is_signed_integral());
        assert!(unsigned.is_unsigned_integral());
    }
}

#[test]
#[should_panic(expected = "not a floating data type: S32 (tag 4)")]
fn significand_width_of_integer_panics() {
    significand_width(PrimitiveType::S32);
}

#[test]
#[should_panic(expected = "not a floating data type: Tuple")]
fn exponent_width_of_tuple_panics() {
    exponent_width(PrimitiveType::Tuple);
}

#[test]
#[should_panic(expected = "not a floating data type: C64")]
fn exponent_bias_of_complex_panics() {
    exponent_bias(PrimitiveType::C64);
}

#[test]
#[should_panic(expected = "not a floating data type: Pred")]
fn underflow_exponent_of_pred_panics() {
    underflow_exponent(PrimitiveType::Pred);
}

#[test]
#[should_panic(expected = "not a floating data type: Invalid")]
fn overflow_exponent_of_invalid_panics() {
    overflow_exponent(PrimitiveType::Invalid);
}

#[test]
fn float_format_bundles_properties() {
    let format = FloatFormat::of(PrimitiveType::F8E4M3Fnuz).unwrap();

    assert_eq!(
        format,
        FloatFormat {
            ty: PrimitiveType::F8E4M3Fnuz,
            bit_width: 8,
            significand_width: 4,
            exponent_width: 4,
            exponent_bias: 8,
            underflow_exponent: -6,
            overflow_exponent: 8,
            has_infinity: false,
        }
    );
    assert_eq!(format.trailing_significand_width(), 3);
}

#[test]
fn float_format_of_non_float_is_none() {
    assert_eq!(FloatFormat::of(PrimitiveType::S8), None);
    assert_eq!(FloatFormat::of(PrimitiveType::Opaque), None);
    assert_eq!(FloatFormat::of(PrimitiveType::C128), None);
}

#[test]
fn float_formats_cover_every_float() {
    let tys: Vec<_> = float_formats().map(|f| f.ty).collect();
    assert_eq!(tys, floats().collect::<Vec<_>>());
}
