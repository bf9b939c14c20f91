// src/fft/butterfly.rs

use num_complex::Complex;

use crate::format::ComplexCustomFloat;

/// Data-flow variant of a radix-2 butterfly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decimation {
    /// `X = A + B`, `Y = (A - B) * W`. Used by the forward network.
    Frequency,
    /// `X = A + B*W`, `Y = A - B*W` with the conjugate of `W`. Used by the inverse network.
    Time,
}

/// Runs one butterfly in place on `a` and `b` with twiddle `w`.
///
/// Every product is a separate real multiply and every sum goes through the
/// adder, in the operand order of the hardware datapath. With `bypass` set the
/// inputs pass through untouched.
#[inline]
pub fn butterfly(
    a: &mut ComplexCustomFloat,
    b: &mut ComplexCustomFloat,
    w: ComplexCustomFloat,
    decimation: Decimation,
    bypass: bool,
) {
    if bypass {
        return;
    }

    let (x, y) = match decimation {
        Decimation::Frequency => {
            let x = Complex::new(a.re + b.re, a.im + b.im);
            let d = Complex::new(a.re - b.re, a.im - b.im);
            let y = Complex::new(d.re * w.re - d.im * w.im, d.re * w.im + d.im * w.re);
            (x, y)
        }
        Decimation::Time => {
            // B * conj(W): one table serves both directions
            let bw = Complex::new(b.re * w.re + b.im * w.im, b.im * w.re - b.re * w.im);
            let x = Complex::new(a.re + bw.re, a.im + bw.im);
            let y = Complex::new(a.re - bw.re, a.im - bw.im);
            (x, y)
        }
    };

    *a = x;
    *b = y;
}
