// src/fft/twiddle.rs

use alloc::vec::Vec;
use core::f64::consts::{FRAC_PI_2, PI};
use num_complex::Complex;

use super::bitrev::check_size;
use crate::common::FftError;
use crate::format::{ComplexCustomFloat, CustomFloat, TWIDDLE_BIAS};

/// Source of twiddle tables.
///
/// For a transform of `size` points a provider returns at least `size / 2`
/// entries, entry `k` being `exp(-j*2*pi*k/size)` encoded with exponent bias
/// [`TWIDDLE_BIAS`]. The engine trusts the encoding and only checks the length.
pub trait TwiddleProvider {
    type Error: From<FftError>;

    fn twiddles(&self, size: usize, use_taylor: bool)
        -> Result<Vec<ComplexCustomFloat>, Self::Error>;
}

/// Checks that `table` covers a transform of `size` points.
pub fn validate_table(table: &[ComplexCustomFloat], size: usize) -> Result<(), FftError> {
    if table.len() < size / 2 {
        return Err(FftError::MalformedTwiddleTable { expected: size / 2, found: table.len() });
    }
    Ok(())
}

/// Computes the table in process instead of loading it.
///
/// Without Taylor refinement sin/cos come from `libm`; with it they are summed
/// from their Taylor series on the quadrant-reduced angle, which gives exact
/// zeros and unit values on the axes.
#[derive(Debug, Default, Clone, Copy)]
pub struct GeneratedTwiddles;

impl TwiddleProvider for GeneratedTwiddles {
    type Error = FftError;

    fn twiddles(&self, size: usize, use_taylor: bool) -> Result<Vec<ComplexCustomFloat>, FftError> {
        check_size(size)?;
        log::trace!("Generating {} twiddles for N={} (taylor: {})", size / 2, size, use_taylor);

        let table = (0..size / 2)
            .map(|k| {
                let angle = -2.0 * PI * (k as f64) / (size as f64);
                let (sin, cos) = if use_taylor { taylor_sin_cos(angle) } else { libm::sincos(angle) };
                Complex::new(
                    CustomFloat::from_f64(cos, TWIDDLE_BIAS),
                    CustomFloat::from_f64(sin, TWIDDLE_BIAS),
                )
            })
            .collect();
        Ok(table)
    }
}

const TAYLOR_TERMS: u32 = 12;

/// Returns `(sin, cos)` of `angle` from the Taylor series around the nearest multiple of pi/2.
fn taylor_sin_cos(angle: f64) -> (f64, f64) {
    let quadrant = libm::round(angle / FRAC_PI_2);
    let r = angle - quadrant * FRAC_PI_2;
    let r2 = r * r;

    let mut sin = 0.0;
    let mut cos = 0.0;
    let mut sin_term = r;
    let mut cos_term = 1.0;
    for k in 0..TAYLOR_TERMS {
        sin += sin_term;
        cos += cos_term;
        let k = k as f64;
        sin_term *= -r2 / ((2.0 * k + 2.0) * (2.0 * k + 3.0));
        cos_term *= -r2 / ((2.0 * k + 1.0) * (2.0 * k + 2.0));
    }

    match (quadrant as i64).rem_euclid(4) {
        0 => (sin, cos),
        1 => (cos, -sin),
        2 => (-sin, -cos),
        _ => (-cos, sin),
    }
}
