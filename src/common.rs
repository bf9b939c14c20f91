// src/common.rs

use core::fmt;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FftError {
    UnsupportedSize(usize),
    UnsupportedDirection(char),
    UnsupportedOrder(char),
    MalformedTwiddleTable { expected: usize, found: usize },
    SizeMismatch { expected: usize, found: usize },
}

impl fmt::Display for FftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FftError::UnsupportedSize(n) => {
                write!(f, "FFT length {n} is not a power of two in 8..=262144")
            }
            FftError::UnsupportedDirection(c) => {
                write!(f, "Cannot calculate FFT/IFFT for direction {c:?} (use 'f' or 'i')")
            }
            FftError::UnsupportedOrder(c) => {
                write!(f, "Incorrect output order {c:?} (use 'n' or 'r')")
            }
            FftError::MalformedTwiddleTable { expected, found } => write!(
                f,
                "Twiddle table has {found} entries, at least {expected} required"
            ),
            FftError::SizeMismatch { expected, found } => write!(
                f,
                "Data buffer size {found} does not match FFT size {expected}"
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FftError {}

/// Which butterfly network a transform runs through.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Direction {
    /// Decimation-in-frequency network.
    Forward,
    /// Decimation-in-time network.
    Inverse,
}

impl Direction {
    /// Parses the single-character flag used by the hardware test benches.
    pub fn from_flag(flag: char) -> Result<Self, FftError> {
        match flag {
            'f' => Ok(Direction::Forward),
            'i' => Ok(Direction::Inverse),
            other => Err(FftError::UnsupportedDirection(other)),
        }
    }
}

/// Ordering of the transform output.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum OutputOrder {
    /// Each output slot pulls from the bit-reversed slot of the network output.
    Natural,
    /// Network output as produced by the last stage.
    Raw,
}

impl OutputOrder {
    pub fn from_flag(flag: char) -> Result<Self, FftError> {
        match flag {
            'n' => Ok(OutputOrder::Natural),
            'r' => Ok(OutputOrder::Raw),
            other => Err(FftError::UnsupportedOrder(other)),
        }
    }
}

pub trait FftProcess<T> {
    fn process(
        &self,
        buffer: &mut [T],
        direction: Direction,
        order: OutputOrder,
    ) -> Result<(), FftError>;
}
