// src/fft/bitrev.rs

use alloc::vec::Vec;
use core::ops::Index;

use crate::common::FftError;

/// Smallest transform length the butterfly network supports.
pub const MIN_SIZE: usize = 8;
/// Largest transform length the butterfly network supports.
pub const MAX_SIZE: usize = 262_144;

/// Returns `log2(size)` for a supported transform length.
pub fn check_size(size: usize) -> Result<u32, FftError> {
    if size.is_power_of_two() && (MIN_SIZE..=MAX_SIZE).contains(&size) {
        Ok(size.trailing_zeros())
    } else {
        Err(FftError::UnsupportedSize(size))
    }
}

/// Reverses the low `bits` bits of `index`, examining them from least to most significant.
pub fn reverse_bits(index: usize, bits: u32) -> usize {
    let mut reversed = 0;
    for bit in 0..bits {
        if index & (1 << bit) != 0 {
            reversed += 1 << (bits - 1 - bit);
        }
    }
    reversed
}

/// Bit-reversal permutation for one transform length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitReversal {
    bits: u32,
    table: Vec<usize>,
}

impl BitReversal {
    /// Builds the table for `size`, which must be a power of two in `8..=262144`.
    pub fn new(size: usize) -> Result<Self, FftError> {
        let bits = check_size(size)?;
        let table = (0..size).map(|i| reverse_bits(i, bits)).collect();
        Ok(Self { bits, table })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Number of index bits, `log2(len)`.
    #[inline]
    pub fn bits(&self) -> u32 {
        self.bits
    }

    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        &self.table
    }

    /// Fills `dst` so that each slot pulls from the bit-reversed slot of `src`.
    pub fn gather<T: Copy>(&self, src: &[T], dst: &mut [T]) -> Result<(), FftError> {
        if src.len() != self.len() || dst.len() != self.len() {
            return Err(FftError::SizeMismatch {
                expected: self.len(),
                found: if src.len() != self.len() { src.len() } else { dst.len() },
            });
        }
        for (out, &from) in dst.iter_mut().zip(self.table.iter()) {
            *out = src[from];
        }
        Ok(())
    }
}

impl Index<usize> for BitReversal {
    type Output = usize;

    #[inline]
    fn index(&self, index: usize) -> &usize {
        &self.table[index]
    }
}
