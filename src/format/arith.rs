// src/format/arith.rs

//! Adder and multiplier of the hardware float unit.
//!
//! Both functions reproduce the datapath step by step: the shift masks, the
//! MSB seeker and the exponent constants below decide every output bit of the
//! transform and must not be simplified.

use super::float::CustomFloat;

/// Exponent correction of the multiplier: two implicit bits plus the twiddle bias.
pub const MULTIPLY_BIAS: i32 = 31;

/// Alignment shifter width: exponent differences are taken modulo 16.
const ALIGN_MASK: i32 = 0xF;
/// Exponent difference bits that mean the smaller operand is shifted out entirely.
const ALIGN_OVERFLOW_MASK: i32 = 0x30;
/// Normalizer shift amounts are 5 bits wide.
const SHIFT_MASK: u32 = 0x1F;

/// Multiplies two custom floats.
///
/// The 17-bit significands are multiplied exactly; the product is truncated to
/// 16 mantissa bits after a 16- or 17-bit shift depending on the carry into
/// bit 33. Either operand with exponent 0 gives canonical zero.
pub fn multiply(a: CustomFloat, b: CustomFloat) -> CustomFloat {
    if a.is_zero() || b.is_zero() {
        return CustomFloat::ZERO;
    }

    let sign = a.sign() ^ b.sign();
    let product = a.significand() as u64 * b.significand() as u64;

    let carry = ((product >> 33) & 1) as u32;
    let mantissa = if carry == 1 {
        (product >> 17) & 0xFFFF
    } else {
        (product >> 16) & 0xFFFF
    };

    let exponent =
        a.exponent() as i32 + b.exponent() as i32 - MULTIPLY_BIAS + carry as i32;

    CustomFloat::from_exponent(sign, exponent, mantissa as u32)
}

/// Adds `b` to `a`, or subtracts it when `subtract` is set.
pub fn add_sub(a: CustomFloat, b: CustomFloat, subtract: bool) -> CustomFloat {
    let b = if subtract { -b } else { b };

    // The operand with the larger (exponent, mantissa) anchors the result; ties keep `a`.
    let (large, small) = if a.magnitude_key() < b.magnitude_key() {
        (b, a)
    } else {
        (a, b)
    };

    let large_man = large.significand();
    let small_man = small.significand();
    let effective_sub = large.sign() != small.sign();

    let exp_diff = large.exponent() as i32 - small.exponent() as i32;
    let aligned = if exp_diff & ALIGN_OVERFLOW_MASK != 0 {
        0
    } else {
        small_man >> (exp_diff & ALIGN_MASK)
    };

    // Ordering guarantees large_man >= aligned
    let sum = if effective_sub {
        large_man - aligned
    } else {
        large_man + aligned
    };

    if sum == 0 {
        return CustomFloat::ZERO;
    }

    let msb = seek_msb(((sum >> 2) & 0xFFFF) << 16);
    let shift = !msb & SHIFT_MASK;

    let mantissa = ((sum as u64 >> 1) << shift) & 0xFFFF;

    let anchored = large.exponent() as i32 - shift as i32;
    if anchored < 0 {
        return CustomFloat::ZERO;
    }

    CustomFloat::from_exponent(large.sign(), anchored + 1, mantissa as u32)
}

/// MSB seeker: scans every bit position from 0 to 31 and keeps the highest set one.
///
/// An all-zero word reports position 0.
pub(crate) fn seek_msb(word: u32) -> u32 {
    let mut msb = 0;
    let mut scan = word;
    for position in 0..32 {
        if scan & 1 == 1 {
            msb = position;
        }
        scan >>= 1;
    }
    msb
}

#[cfg(test)]
#[path = "arith_tests.rs"]
mod tests;
