//! Human-readable table of float formats, for debugging and documentation.

use std::fmt::Write as _;

use crate::format::{FloatFormat, float_formats};
use crate::names::lowercase_name;

/// Render every floating-point format as an aligned `[float_formats]` section.
pub fn dump_float_formats() -> String {
    let mut out = String::new();
    out.push_str("[float_formats]\n");
    write_row(
        &mut out,
        ["type", "bits", "sig", "exp", "bias", "emin", "emax", "inf"].map(String::from),
    );
    for format in float_formats() {
        write_row(&mut out, row(&format));
    }
    out
}

fn row(format: &FloatFormat) -> [String; 8] {
    [
        lowercase_name(format.ty).to_string(),
        format.bit_width.to_string(),
        format.significand_width.to_string(),
        format.exponent_width.to_string(),
        format.exponent_bias.to_string(),
        format.underflow_exponent.to_string(),
        format.overflow_exponent.to_string(),
        if format.has_infinity { "yes" } else { "no" }.to_string(),
    ]
}

fn write_row(out: &mut String, [name, bits, sig, exp, bias, emin, emax, inf]: [String; 8]) {
    writeln!(
        out,
        "{name:<13}  {bits:>4}  {sig:>3}  {exp:>3}  {bias:>4}  {emin:>5}  {emax:>4}  {inf}"
    )
    .unwrap();
}
