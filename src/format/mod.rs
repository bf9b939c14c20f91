mod float;
pub mod arith;
pub mod convert;

pub use arith::{add_sub, multiply};
pub use convert::{
    complex_to_samples, fix_to_float16, fix_to_float24, float_to_fix, samples_to_complex,
    SampleWidth,
};
pub use float::{
    collapse, expand, CustomFloat, EXPONENT_MASK, IMPLICIT_ONE, MAX_EXPONENT, SAMPLE_BIAS,
    TWIDDLE_BIAS,
};

use num_complex::Complex;

/// A sample or twiddle factor: a (re, im) pair of custom floats.
pub type ComplexCustomFloat = Complex<CustomFloat>;
