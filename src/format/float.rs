// src/format/float.rs

use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

use super::arith::{add_sub, multiply};

/// The exponent field is 6 bits wide.
pub const EXPONENT_MASK: u8 = 0x3F;
pub const MAX_EXPONENT: u8 = 63;

/// Leading one reinstated in front of a 16-bit mantissa during arithmetic.
pub const IMPLICIT_ONE: u32 = 0x1_0000;

/// Exponent of 1.0 for a value converted from an integer sample.
pub const SAMPLE_BIAS: i32 = 16;

/// Exponent of 1.0 in a twiddle table; multiplying by it leaves a sample's exponent unchanged.
pub const TWIDDLE_BIAS: i32 = 31;

const MANTISSA_MASK: u32 = 0xFFFF;
const EXPONENT_SHIFT: u32 = 16;
const SIGN_SHIFT: u32 = 22;

/// Hardware float: 1 sign bit, 6-bit exponent, 16-bit mantissa without the leading one.
///
/// Exponent 0 is zero. There is no infinity or NaN; results that leave the
/// exponent range saturate or flush to [`CustomFloat::ZERO`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CustomFloat {
    sign: bool,
    exponent: u8,
    mantissa: u16,
}

impl CustomFloat {
    /// Canonical zero: sign, exponent and mantissa all cleared.
    pub const ZERO: Self = Self { sign: false, exponent: 0, mantissa: 0 };

    /// Largest positive magnitude.
    pub const MAX: Self = Self { sign: false, exponent: MAX_EXPONENT, mantissa: 0xFFFF };

    /// Builds a value from raw fields. Exponent bits above the 6-bit field are dropped.
    #[inline]
    pub const fn new(sign: bool, exponent: u8, mantissa: u16) -> Self {
        Self { sign, exponent: exponent & EXPONENT_MASK, mantissa }
    }

    #[inline]
    pub const fn sign(self) -> bool {
        self.sign
    }

    #[inline]
    pub const fn exponent(self) -> u8 {
        self.exponent
    }

    #[inline]
    pub const fn mantissa(self) -> u16 {
        self.mantissa
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.exponent == 0
    }

    /// Maximum magnitude with the given sign.
    #[inline]
    pub const fn saturated(sign: bool) -> Self {
        Self { sign, exponent: MAX_EXPONENT, mantissa: 0xFFFF }
    }

    /// Clamps a computed exponent into the field: flush to zero below 1, saturate above 63.
    pub(crate) const fn from_exponent(sign: bool, exponent: i32, mantissa: u32) -> Self {
        if exponent <= 0 {
            Self::ZERO
        } else if exponent > MAX_EXPONENT as i32 {
            Self::saturated(sign)
        } else {
            Self { sign, exponent: exponent as u8, mantissa: (mantissa & MANTISSA_MASK) as u16 }
        }
    }

    /// Mantissa with the implicit one reinstated when the exponent is non-zero.
    #[inline]
    pub(crate) const fn significand(self) -> u32 {
        if self.exponent == 0 {
            self.mantissa as u32
        } else {
            self.mantissa as u32 | IMPLICIT_ONE
        }
    }

    /// `(exponent << 16) | mantissa`, the magnitude ordering the adder uses.
    #[inline]
    pub(crate) const fn magnitude_key(self) -> u32 {
        ((self.exponent as u32) << EXPONENT_SHIFT) | self.mantissa as u32
    }

    /// Unpacks exponent (bits 16..=21), sign (bit 22) and mantissa (bits 0..=15).
    #[inline]
    pub const fn from_packed(packed: u32) -> Self {
        Self {
            sign: (packed >> SIGN_SHIFT) & 1 == 1,
            exponent: ((packed >> EXPONENT_SHIFT) as u8) & EXPONENT_MASK,
            mantissa: (packed & MANTISSA_MASK) as u16,
        }
    }

    /// Packs the fields back into a single word; inverse of [`CustomFloat::from_packed`].
    #[inline]
    pub const fn to_packed(self) -> u32 {
        (((self.exponent & EXPONENT_MASK) as u32) << EXPONENT_SHIFT)
            | ((self.sign as u32) << SIGN_SHIFT)
            | self.mantissa as u32
    }

    /// Encodes an `f64` where 1.0 has exponent `bias`, rounding the mantissa to nearest.
    ///
    /// NaN and values too small for the exponent field become zero, infinities saturate.
    pub fn from_f64(value: f64, bias: i32) -> Self {
        if value.is_nan() || value == 0.0 {
            return Self::ZERO;
        }
        let sign = value < 0.0;
        if value.is_infinite() {
            return Self::saturated(sign);
        }

        // frexp gives [0.5, 1); the format stores [1, 2)
        let (frac, exp) = libm::frexp(libm::fabs(value));
        let mut exponent = exp - 1 + bias;
        let mut mantissa = libm::round((frac * 2.0 - 1.0) * 65536.0) as u32;
        if mantissa > MANTISSA_MASK {
            mantissa = 0;
            exponent += 1;
        }
        Self::from_exponent(sign, exponent, mantissa)
    }

    /// Decodes to `f64` with the same bias convention as [`CustomFloat::from_f64`].
    pub fn to_f64(self, bias: i32) -> f64 {
        let magnitude =
            libm::ldexp(self.significand() as f64, self.exponent as i32 - bias - 16);
        if self.sign { -magnitude } else { magnitude }
    }
}

/// Free-function form of [`CustomFloat::from_packed`].
#[inline]
pub const fn expand(packed: u32) -> CustomFloat {
    CustomFloat::from_packed(packed)
}

/// Free-function form of [`CustomFloat::to_packed`].
#[inline]
pub const fn collapse(value: CustomFloat) -> u32 {
    value.to_packed()
}

impl Add for CustomFloat {
    type Output = CustomFloat;

    #[inline]
    fn add(self, rhs: CustomFloat) -> Self::Output {
        add_sub(self, rhs, false)
    }
}

impl Sub for CustomFloat {
    type Output = CustomFloat;

    #[inline]
    fn sub(self, rhs: CustomFloat) -> Self::Output {
        add_sub(self, rhs, true)
    }
}

impl Mul for CustomFloat {
    type Output = CustomFloat;

    #[inline]
    fn mul(self, rhs: CustomFloat) -> Self::Output {
        multiply(self, rhs)
    }
}

impl Neg for CustomFloat {
    type Output = CustomFloat;

    /// Flips the sign bit only; zero keeps its fields.
    #[inline]
    fn neg(self) -> Self::Output {
        Self { sign: !self.sign, ..self }
    }
}

impl fmt::Display for CustomFloat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:06X}", self.to_packed())
    }
}

impl fmt::Debug for CustomFloat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Sign, exponent and mantissa side by side, e.g. "-e31:8000"
        let sign = if self.sign { '-' } else { '+' };
        write!(f, "{}e{}:{:04X}", sign, self.exponent, self.mantissa)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::format;

    #[test]
    fn test_pack_layout() {
        let x = CustomFloat::new(true, 0x2A, 0xBEEF);
        assert_eq!(x.to_packed(), 0x6A_BEEF);
        assert_eq!(CustomFloat::from_packed(0x6A_BEEF), x);
    }

    #[test]
    fn test_expand_ignores_high_bits() {
        let x = expand(0xFF80_1234);
        assert_eq!(x.exponent(), 0);
        assert!(!x.sign());
        assert_eq!(x.mantissa(), 0x1234);
    }

    #[test]
    fn test_new_masks_exponent() {
        assert_eq!(CustomFloat::new(false, 0x41, 0).exponent(), 1);
    }

    #[test]
    fn test_from_f64_unity() {
        let one = CustomFloat::from_f64(1.0, TWIDDLE_BIAS);
        assert_eq!(one, CustomFloat::new(false, 31, 0));

        let minus_half = CustomFloat::from_f64(-0.5, TWIDDLE_BIAS);
        assert_eq!(minus_half, CustomFloat::new(true, 30, 0));

        assert_eq!(CustomFloat::from_f64(0.0, TWIDDLE_BIAS), CustomFloat::ZERO);
        assert_eq!(CustomFloat::from_f64(f64::NAN, TWIDDLE_BIAS), CustomFloat::ZERO);
    }

    #[test]
    fn test_from_f64_rounds_and_carries() {
        // 1.75 -> mantissa 0xC000
        assert_eq!(CustomFloat::from_f64(1.75, SAMPLE_BIAS), CustomFloat::new(false, 16, 0xC000));
        // Just below 2.0 rounds up into the next exponent
        let almost_two = 2.0 - 1.0 / 262144.0;
        assert_eq!(CustomFloat::from_f64(almost_two, SAMPLE_BIAS), CustomFloat::new(false, 17, 0));
    }

    #[test]
    fn test_from_f64_range_limits() {
        assert_eq!(CustomFloat::from_f64(1e-30, TWIDDLE_BIAS), CustomFloat::ZERO);
        assert_eq!(CustomFloat::from_f64(-1e30, TWIDDLE_BIAS), CustomFloat::saturated(true));
        assert_eq!(CustomFloat::from_f64(f64::INFINITY, 0), CustomFloat::MAX);
    }

    #[test]
    fn test_to_f64() {
        let x = CustomFloat::new(true, 18, 0x8000);
        assert_eq!(x.to_f64(SAMPLE_BIAS), -6.0);
        assert_eq!(CustomFloat::ZERO.to_f64(SAMPLE_BIAS), 0.0);
    }

    #[test]
    fn test_neg_flips_sign_only() {
        let x = CustomFloat::new(false, 20, 0x1234);
        assert_eq!(-x, CustomFloat::new(true, 20, 0x1234));
    }

    #[test]
    fn test_debug_display() {
        let x = CustomFloat::new(true, 31, 0x8000);
        assert_eq!(format!("{:?}", x), "-e31:8000");
        assert_eq!(format!("{}", x), "0x5F8000");
    }
}
