use super::*;
use super::super::float::{CustomFloat, MAX_EXPONENT};

fn cf(sign: bool, exponent: u8, mantissa: u16) -> CustomFloat {
    CustomFloat::new(sign, exponent, mantissa)
}

const ONE: CustomFloat = CustomFloat::new(false, 16, 0);
const THREE: CustomFloat = CustomFloat::new(false, 17, 0x8000);
const UNITY_TWIDDLE: CustomFloat = CustomFloat::new(false, 31, 0);

#[test]
fn test_seek_msb() {
    assert_eq!(seek_msb(0), 0);
    assert_eq!(seek_msb(1), 0);
    assert_eq!(seek_msb(0x8000_0000), 31);
    assert_eq!(seek_msb(0x0001_0100), 16);
    assert_eq!(seek_msb(0xFFFF_FFFF), 31);
}

#[test]
fn test_multiply_by_unity_twiddle_keeps_value() {
    assert_eq!(multiply(ONE, UNITY_TWIDDLE), ONE);
    assert_eq!(multiply(THREE, UNITY_TWIDDLE), THREE);
    assert_eq!(multiply(-THREE, UNITY_TWIDDLE), -THREE);
}

#[test]
fn test_multiply_carry_path() {
    // 1.5 * 1.5 = 2.25: product crosses bit 33, so the 17-bit shift and +1 exponent apply
    let a = cf(false, 16, 0x8000);
    let b = cf(true, 31, 0x8000);
    assert_eq!(multiply(a, b), cf(true, 17, 0x2000));
}

#[test]
fn test_multiply_truncates() {
    // (1 + 2^-16) * (1 + 2^-16) = 1 + 2^-15 + 2^-32, the last term is dropped
    let a = cf(false, 20, 1);
    let b = cf(false, 31, 1);
    assert_eq!(multiply(a, b), cf(false, 20, 2));
}

#[test]
fn test_multiply_by_zero_is_canonical_zero() {
    let x = cf(true, 45, 0xABCD);
    assert_eq!(multiply(x, CustomFloat::ZERO), CustomFloat::ZERO);
    assert_eq!(multiply(CustomFloat::ZERO, x), CustomFloat::ZERO);
    // Any exponent-0 operand counts as zero, whatever its other fields
    assert_eq!(multiply(x, cf(true, 0, 0x1234)), CustomFloat::ZERO);
}

#[test]
fn test_multiply_exponent_range() {
    assert_eq!(multiply(cf(false, 1, 0), cf(true, 1, 0)), CustomFloat::ZERO);
    assert_eq!(
        multiply(cf(false, MAX_EXPONENT, 0), cf(true, MAX_EXPONENT, 0)),
        CustomFloat::saturated(true)
    );
}

#[test]
fn test_add_same_exponent() {
    assert_eq!(add_sub(ONE, ONE, false), cf(false, 17, 0));
}

#[test]
fn test_subtract_orders_by_magnitude() {
    // 3 - 1 = 2
    assert_eq!(add_sub(THREE, ONE, true), cf(false, 17, 0));
    // 1 - 3 = -2, the larger operand's sign wins
    assert_eq!(add_sub(ONE, THREE, true), cf(true, 17, 0));
}

#[test]
fn test_add_is_symmetric_for_distinct_magnitudes() {
    let a = cf(false, 22, 0x1357);
    let b = cf(true, 19, 0xF00D);
    assert_eq!(add_sub(a, b, false), add_sub(b, a, false));
}

#[test]
fn test_add_zero_drops_last_mantissa_bit() {
    // A sum whose MSB is bit 16 realigns through (sum >> 1) << 1
    let x = cf(false, 16, 0x0001);
    assert_eq!(add_sub(x, CustomFloat::ZERO, false), cf(false, 16, 0));
    assert_eq!(add_sub(ONE, CustomFloat::ZERO, true), ONE);
}

#[test]
fn test_alignment_shift_limits() {
    // Difference 15: the smaller significand still contributes
    let a = cf(false, 31, 0);
    let b = cf(false, 16, 0);
    assert_eq!(add_sub(a, b, false), cf(false, 31, 2));

    // Difference 16 and beyond: the smaller operand is negligible
    let a = cf(false, 32, 0);
    assert_eq!(add_sub(a, b, false), a);
    let a = cf(false, 40, 0);
    assert_eq!(add_sub(a, cf(false, 20, 0xFFFF), true), a);
}

#[test]
fn test_self_subtraction_is_canonical_zero() {
    for x in [ONE, -THREE, cf(true, 45, 0x1234), CustomFloat::MAX, cf(false, 1, 0)] {
        assert_eq!(add_sub(x, x, true), CustomFloat::ZERO, "{:?} - itself", x);
    }
}

#[test]
fn test_add_of_opposites_is_canonical_zero() {
    let x = cf(false, 33, 0x4242);
    assert_eq!(add_sub(x, -x, false), CustomFloat::ZERO);
}

#[test]
fn test_cancellation_below_range_flushes_to_zero() {
    let a = cf(false, 1, 1);
    let b = cf(false, 1, 0);
    assert_eq!(add_sub(a, b, true), CustomFloat::ZERO);
}

#[test]
fn test_normalizer_ignores_two_lowest_sum_bits() {
    // Only bit 0 of the difference survives; the seeker reports 0 and the shift is 31
    let a = cf(false, 40, 1);
    let b = cf(false, 40, 0);
    assert_eq!(add_sub(a, b, true), cf(false, 10, 0));
}

#[test]
fn test_add_overflow_saturates() {
    assert_eq!(add_sub(CustomFloat::MAX, CustomFloat::MAX, false), CustomFloat::MAX);
    let neg_max = CustomFloat::saturated(true);
    assert_eq!(add_sub(neg_max, CustomFloat::MAX, true), neg_max);
}

#[test]
fn test_operator_impls_match_functions() {
    let a = cf(false, 24, 0x0F0F);
    let b = cf(true, 23, 0x7777);
    assert_eq!(a + b, add_sub(a, b, false));
    assert_eq!(a - b, add_sub(a, b, true));
    assert_eq!(a * b, multiply(a, b));
}
