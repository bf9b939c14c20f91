use super::*;
use crate::fft::twiddle::{GeneratedTwiddles, TwiddleProvider};
use crate::format::{CustomFloat, SAMPLE_BIAS};
use num_complex::Complex;
use std::vec::Vec;

fn sample(re: f64, im: f64) -> ComplexCustomFloat {
    Complex::new(CustomFloat::from_f64(re, SAMPLE_BIAS), CustomFloat::from_f64(im, SAMPLE_BIAS))
}

fn ramp(n: usize) -> Vec<ComplexCustomFloat> {
    (0..n).map(|i| sample(i as f64 + 1.0, -(i as f64) * 0.5)).collect()
}

#[test]
fn test_forward_network_leaves_even_odd_halves() {
    let n = 16;
    let twiddles = GeneratedTwiddles.twiddles(n, false).unwrap();
    let mut ws = Workspace::new(&ramp(n));

    forward_network(&mut ws, &twiddles, 4, false);

    // Last stage pairs neighbours, slot k holds positions 2k and 2k+1
    for k in 0..n / 2 {
        assert_eq!(ws.upper[k], ws.stage[2 * k]);
        assert_eq!(ws.lower[k], ws.stage[2 * k + 1]);
    }
}

#[test]
fn test_inverse_network_leaves_low_high_halves() {
    let n = 16;
    let twiddles = GeneratedTwiddles.twiddles(n, false).unwrap();
    let mut ws = Workspace::new(&ramp(n));

    inverse_network(&mut ws, &twiddles, 4, false);

    // Last stage pairs k with k + N/2
    for k in 0..n / 2 {
        assert_eq!(ws.upper[k], ws.stage[k]);
        assert_eq!(ws.lower[k], ws.stage[k + n / 2]);
    }
}

#[test]
fn test_complete_layouts() {
    let n = 8;
    let input = ramp(n);
    let mut ws = Workspace::new(&input);
    ws.upper.copy_from_slice(&input[..4]);
    ws.lower.copy_from_slice(&input[4..]);

    let mut out = std::vec![ComplexCustomFloat::default(); n];
    complete(&ws, Direction::Forward, &mut out);
    let interleaved: Vec<_> = (0..4).flat_map(|i| [input[i], input[i + 4]]).collect();
    assert_eq!(out, interleaved);

    complete(&ws, Direction::Inverse, &mut out);
    assert_eq!(out, input);
}

#[test]
fn test_completion_reassembles_stage_vector() {
    let n = 32;
    let twiddles = GeneratedTwiddles.twiddles(n, true).unwrap();
    for direction in [Direction::Forward, Direction::Inverse] {
        let mut ws = Workspace::new(&ramp(n));
        match direction {
            Direction::Forward => forward_network(&mut ws, &twiddles, 5, false),
            Direction::Inverse => inverse_network(&mut ws, &twiddles, 5, false),
        }
        let mut out = std::vec![ComplexCustomFloat::default(); n];
        complete(&ws, direction, &mut out);
        assert_eq!(out, ws.stage, "{:?}", direction);
    }
}

#[test]
fn test_bypass_network_is_identity() {
    let n = 8;
    let input = ramp(n);
    let twiddles = GeneratedTwiddles.twiddles(n, false).unwrap();

    let mut ws = Workspace::new(&input);
    forward_network(&mut ws, &twiddles, 3, true);
    assert_eq!(ws.stage, input);

    let mut ws = Workspace::new(&input);
    inverse_network(&mut ws, &twiddles, 3, true);
    assert_eq!(ws.stage, input);
}
