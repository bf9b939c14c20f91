use alloc::vec;
use alloc::vec::Vec;

use super::bitrev::BitReversal;
use super::core::{complete, forward_network, inverse_network, Workspace};
use super::twiddle::{validate_table, TwiddleProvider};
use crate::common::{Direction, FftError, FftProcess, OutputOrder};
use crate::format::ComplexCustomFloat;

/// Structure that holds the tables of one transform length (twiddle factors and bit reverse).
///
/// The tables are read-only once built, so one instance can serve any number
/// of transforms, from several threads at once.
#[derive(Debug, Clone)]
pub struct CustomFft {
    twiddles: Vec<ComplexCustomFloat>,
    bitrev: BitReversal,
    bypass: bool,
}

impl CustomFft {
    /// Builds the bit-reversal table for `size` and takes ownership of `twiddles`.
    pub fn new(size: usize, twiddles: Vec<ComplexCustomFloat>) -> Result<Self, FftError> {
        Self::from_parts(BitReversal::new(size)?, twiddles)
    }

    /// Uses an existing bit-reversal table; its length sets the transform size.
    pub fn from_parts(
        bitrev: BitReversal,
        twiddles: Vec<ComplexCustomFloat>,
    ) -> Result<Self, FftError> {
        validate_table(&twiddles, bitrev.len())?;
        Ok(Self { twiddles, bitrev, bypass: false })
    }

    /// Asks `provider` for the twiddle table of `size`.
    pub fn with_provider<P: TwiddleProvider>(
        size: usize,
        provider: &P,
        use_taylor: bool,
    ) -> Result<Self, P::Error> {
        let bitrev = BitReversal::new(size)?;
        let twiddles = provider.twiddles(size, use_taylor)?;
        Ok(Self::from_parts(bitrev, twiddles)?)
    }

    /// Replaces every butterfly with a pass-through copy.
    pub fn with_bypass(mut self, bypass: bool) -> Self {
        self.bypass = bypass;
        self
    }

    /// Transform length `N`.
    #[inline]
    pub fn len(&self) -> usize {
        self.bitrev.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bitrev.is_empty()
    }

    /// Number of butterfly stages, `log2(N)`.
    #[inline]
    pub fn stages(&self) -> u32 {
        self.bitrev.bits()
    }

    #[inline]
    pub fn bitrev(&self) -> &BitReversal {
        &self.bitrev
    }

    /// Executes the transform in place.
    ///
    /// The forward direction runs the decimation-in-frequency network, the
    /// inverse direction the decimation-in-time network. Neither scales the
    /// result; the inverse reads back with a larger fixed-point scale instead.
    pub fn process(
        &self,
        buffer: &mut [ComplexCustomFloat],
        direction: Direction,
        order: OutputOrder,
    ) -> Result<(), FftError> {
        if buffer.len() != self.len() {
            return Err(FftError::SizeMismatch { expected: self.len(), found: buffer.len() });
        }

        log::debug!("{:?} FFT calculation start (N={}, {:?})", direction, self.len(), order);

        let mut ws = Workspace::new(buffer);
        match direction {
            Direction::Forward => forward_network(&mut ws, &self.twiddles, self.stages(), self.bypass),
            Direction::Inverse => inverse_network(&mut ws, &self.twiddles, self.stages(), self.bypass),
        }

        match order {
            OutputOrder::Raw => complete(&ws, direction, buffer),
            OutputOrder::Natural => {
                let mut network = vec![ComplexCustomFloat::default(); self.len()];
                complete(&ws, direction, &mut network);
                self.bitrev.gather(&network, buffer)?;
            }
        }

        log::debug!("Calculation finish");
        Ok(())
    }

    #[inline]
    pub fn forward(&self, buffer: &mut [ComplexCustomFloat], order: OutputOrder) -> Result<(), FftError> {
        self.process(buffer, Direction::Forward, order)
    }

    #[inline]
    pub fn inverse(&self, buffer: &mut [ComplexCustomFloat], order: OutputOrder) -> Result<(), FftError> {
        self.process(buffer, Direction::Inverse, order)
    }

    /// Same as [`CustomFft::process`] with the single-character flags of the
    /// hardware test benches: `'f'`/`'i'` for the direction, `'n'`/`'r'` for the order.
    pub fn process_flags(
        &self,
        buffer: &mut [ComplexCustomFloat],
        direction: char,
        order: char,
    ) -> Result<(), FftError> {
        let direction = Direction::from_flag(direction)?;
        let order = OutputOrder::from_flag(order)?;
        self.process(buffer, direction, order)
    }
}

impl FftProcess<ComplexCustomFloat> for CustomFft {
    fn process(
        &self,
        buffer: &mut [ComplexCustomFloat],
        direction: Direction,
        order: OutputOrder,
    ) -> Result<(), FftError> {
        CustomFft::process(self, buffer, direction, order)
    }
}

#[cfg(test)]
#[path = "complex_tests.rs"]
mod tests;
