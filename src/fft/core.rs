// src/fft/core.rs

use alloc::vec;
use alloc::vec::Vec;

use super::butterfly::{butterfly, Decimation};
use crate::common::Direction;
use crate::format::ComplexCustomFloat;

/// Working set of one transform: the full-length stage vector and the two
/// half-length arrays holding the upper and lower input of each butterfly slot.
pub(crate) struct Workspace {
    pub(crate) stage: Vec<ComplexCustomFloat>,
    pub(crate) upper: Vec<ComplexCustomFloat>,
    pub(crate) lower: Vec<ComplexCustomFloat>,
}

impl Workspace {
    pub(crate) fn new(input: &[ComplexCustomFloat]) -> Self {
        let half = input.len() / 2;
        Self {
            stage: input.to_vec(),
            upper: vec![ComplexCustomFloat::default(); half],
            lower: vec![ComplexCustomFloat::default(); half],
        }
    }

    /// Loads a pair into `slot`, runs the butterfly there and writes both results back.
    #[inline]
    fn step(
        &mut self,
        top: usize,
        bottom: usize,
        slot: usize,
        w: ComplexCustomFloat,
        decimation: Decimation,
        bypass: bool,
    ) {
        self.upper[slot] = self.stage[top];
        self.lower[slot] = self.stage[bottom];

        butterfly(&mut self.upper[slot], &mut self.lower[slot], w, decimation, bypass);

        self.stage[top] = self.upper[slot];
        self.stage[bottom] = self.lower[slot];
    }
}

/// Decimation-in-frequency network.
///
/// Stage `s` splits the vector into `2^(s-1)` groups; inside a group the
/// butterfly pairs slots `span` apart, `span = N / 2^s`, and uses twiddle
/// `i * 2^(s-1)` for offset `i`.
pub(crate) fn forward_network(
    ws: &mut Workspace,
    twiddles: &[ComplexCustomFloat],
    stages: u32,
    bypass: bool,
) {
    let n = ws.stage.len();

    for s in 1..=stages {
        log::debug!("Fwd FFT stage: 0x{:02X}", s);

        let span = n >> s;
        let groups = 1usize << (s - 1);
        let group_len = n >> (s - 1);

        for g in 0..groups {
            for i in 0..span {
                let top = i + g * group_len;
                let slot = i + g * span;
                let w = twiddles[i * groups];
                ws.step(top, top + span, slot, w, Decimation::Frequency, bypass);
            }
        }
    }
}

/// Decimation-in-time network.
///
/// Stage `s` splits the vector into `N / 2^s` groups of `2^s` slots; inside a
/// group the butterfly pairs slots `2^(s-1)` apart and uses twiddle
/// `i * N / 2^s` for offset `i`. The working slot strides by the group count.
pub(crate) fn inverse_network(
    ws: &mut Workspace,
    twiddles: &[ComplexCustomFloat],
    stages: u32,
    bypass: bool,
) {
    let n = ws.stage.len();

    for s in 1..=stages {
        log::debug!("Inv FFT stage: 0x{:02X}", s);

        let half = 1usize << (s - 1);
        let groups = n >> s;
        let group_len = 1usize << s;

        for g in 0..groups {
            for i in 0..half {
                let top = i + g * group_len;
                let slot = g + i * groups;
                let w = twiddles[i * groups];
                ws.step(top, top + half, slot, w, Decimation::Time, bypass);
            }
        }
    }
}

/// Copies the half arrays left by the last stage back into `out`.
///
/// The forward network interleaves them into even/odd positions, the inverse
/// network concatenates them into the low and high halves.
pub(crate) fn complete(ws: &Workspace, direction: Direction, out: &mut [ComplexCustomFloat]) {
    let half = ws.upper.len();
    match direction {
        Direction::Forward => {
            for i in 0..half {
                out[2 * i] = ws.upper[i];
                out[2 * i + 1] = ws.lower[i];
            }
        }
        Direction::Inverse => {
            out[..half].copy_from_slice(&ws.upper);
            out[half..].copy_from_slice(&ws.lower);
        }
    }
}

#[cfg(test)]
#[path = "core_tests.rs"]
mod tests;
