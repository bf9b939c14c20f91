// src/format/convert.rs

//! Fixed-point boundary of the float unit.
//!
//! Negative samples are normalized from their bitwise complement, so the
//! stored magnitude of `-x` is `x - 1`; [`float_to_fix`] undoes this with
//! `-magnitude - 1`.

use alloc::vec::Vec;
use num_complex::Complex;

use super::float::{CustomFloat, SAMPLE_BIAS};
use super::ComplexCustomFloat;

/// Output is 16-bit signed.
const FIX_MAX: i32 = 0x7FFF;
const FIX_MIN: i32 = -0x7FFF - 1;

/// Width of the fixed-point samples fed to the converter.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum SampleWidth {
    #[default]
    Bits16,
    Bits24,
}

impl SampleWidth {
    #[inline]
    pub fn convert(self, value: i32) -> CustomFloat {
        match self {
            SampleWidth::Bits16 => fix_to_float16(value),
            SampleWidth::Bits24 => fix_to_float24(value),
        }
    }
}

/// Shifts `magnitude` left until the marker bit `width - 1` is set, then shifts
/// the marker out. Returns the MSB position and the left-aligned fraction bits.
fn normalize(magnitude: u32, width: u32) -> Option<(u32, u32)> {
    if magnitude == 0 {
        return None;
    }
    let marker = 1u32 << (width - 1);
    let field = (1u32 << width) - 1;

    let mut word = magnitude;
    let mut shifts = 0;
    while word & marker == 0 {
        word <<= 1;
        shifts += 1;
    }
    let fraction = (word << 1) & field;

    Some((width - 1 - shifts, fraction))
}

fn fix_to_float(value: i32, width: u32) -> (bool, Option<(u32, u32)>) {
    let field = (1u32 << width) - 1;
    let sign = (value >> (width - 1)) & 1 == 1;
    let raw = if sign { !value } else { value };
    let magnitude = raw as u32 & field;
    (sign, normalize(magnitude, width))
}

/// Converts a 16-bit signed fixed-point sample. Bits above bit 15 are ignored.
///
/// A sample with MSB at position `p` gets exponent `16 + p`; a zero magnitude
/// gets exponent 0 and keeps its sign bit.
pub fn fix_to_float16(value: i32) -> CustomFloat {
    match fix_to_float(value, 16) {
        (sign, Some((position, fraction))) => {
            CustomFloat::new(sign, (SAMPLE_BIAS as u32 + position) as u8, fraction as u16)
        }
        (sign, None) => CustomFloat::new(sign, 0, 0),
    }
}

/// Converts a 24-bit signed fixed-point sample. Bits above bit 23 are ignored.
///
/// Full scale lands on the same exponent as in [`fix_to_float16`], so a 24-bit
/// sample equals the 16-bit sample `value / 256`. The mantissa keeps the top
/// 16 fraction bits.
pub fn fix_to_float24(value: i32) -> CustomFloat {
    match fix_to_float(value, 24) {
        (sign, Some((position, fraction))) => CustomFloat::new(
            sign,
            (SAMPLE_BIAS as u32 - 8 + position) as u8,
            (fraction >> 8) as u16,
        ),
        (sign, None) => CustomFloat::new(sign, 0, 0),
    }
}

/// Converts a packed float back to a 16-bit fixed-point value with `scale` fractional bits.
///
/// Results below `2^scale` flush to 0; shifts of 15 or more saturate.
pub fn float_to_fix(packed: u32, scale: u32) -> i32 {
    let value = CustomFloat::from_packed(packed);
    let diff = value.exponent() as i32 - scale as i32;

    if diff < 0 {
        return 0;
    }
    if diff & 0x30 != 0 || diff & 0xF == 0xF {
        return if value.sign() { FIX_MIN } else { FIX_MAX };
    }

    let shifted = (value.significand() as u64) << (diff & 0xF);
    let magnitude = ((shifted & 0xFFFF_0000) >> 16) as i32;

    if value.sign() { -magnitude - 1 } else { magnitude }
}

/// Converts `(re, im)` sample pairs into complex custom floats.
pub fn samples_to_complex(samples: &[(i32, i32)], width: SampleWidth) -> Vec<ComplexCustomFloat> {
    samples
        .iter()
        .map(|&(re, im)| Complex::new(width.convert(re), width.convert(im)))
        .collect()
}

/// Converts complex custom floats back into `(re, im)` fixed-point pairs.
pub fn complex_to_samples(values: &[ComplexCustomFloat], scale: u32) -> Vec<(i32, i32)> {
    values
        .iter()
        .map(|v| (float_to_fix(v.re.to_packed(), scale), float_to_fix(v.im.to_packed(), scale)))
        .collect()
}

#[cfg(test)]
#[path = "convert_tests.rs"]
mod tests;
