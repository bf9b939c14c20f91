pub mod bitrev;
pub mod butterfly;
pub mod complex;
mod core;
pub mod twiddle;

pub use crate::common::{Direction, FftError, FftProcess, OutputOrder};
pub use bitrev::BitReversal;
pub use butterfly::Decimation;
pub use complex::CustomFft;
pub use twiddle::{GeneratedTwiddles, TwiddleProvider};
