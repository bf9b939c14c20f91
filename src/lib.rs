#![no_std]

// Enables the standard library for tests and for the file layer,
// so you can run 'cargo test' on your PC normally.
#[cfg(any(test, feature = "std"))]
extern crate std;

extern crate alloc;

pub mod common;
pub mod format;
pub mod fft;

#[cfg(feature = "std")]
pub mod io;

pub use common::{Direction, FftError, FftProcess, OutputOrder};
pub use fft::{BitReversal, CustomFft, GeneratedTwiddles, TwiddleProvider};
pub use format::{ComplexCustomFloat, CustomFloat};
