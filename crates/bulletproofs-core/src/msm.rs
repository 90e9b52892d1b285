//! Multi-scalar multiplication
//!
//! `vector_exp` computes `sum_i(scalars[i] * points[i])`, the dominant cost of every prover and
//! verifier in the workspace. Small inputs are accumulated directly; larger ones go through
//! Pippenger's bucket method with the windows evaluated in parallel.

use crate::{BulletproofsError, BulletproofsResult, Curve, GroupElement};
use group::Group;
use rayon::prelude::*;

/// Inputs at or below this length skip the bucket method
const SIMPLE_MSM_THRESHOLD: usize = 32;

/// Multi-scalar multiplication `prod bases_i^{exps_i}`
pub fn vector_exp<C: Curve>(
    bases: &[GroupElement<C>],
    exps: &[C::Scalar],
) -> BulletproofsResult<GroupElement<C>> {
    if bases.len() != exps.len() {
        return Err(BulletproofsError::VectorLengthMismatch {
            expected: bases.len(),
            actual: exps.len(),
        });
    }

    if bases.is_empty() {
        return Ok(GroupElement::identity());
    }

    if bases.len() <= SIMPLE_MSM_THRESHOLD {
        return Ok(simple_msm(bases, exps));
    }

    Ok(pippenger_msm(bases, exps))
}

fn simple_msm<C: Curve>(bases: &[GroupElement<C>], exps: &[C::Scalar]) -> GroupElement<C> {
    bases
        .iter()
        .zip(exps.iter())
        .map(|(point, scalar)| *point * *scalar)
        .sum()
}

fn pippenger_msm<C: Curve>(bases: &[GroupElement<C>], exps: &[C::Scalar]) -> GroupElement<C> {
    let window_size = optimal_window_size(bases.len());
    let scalar_bytes: Vec<Vec<u8>> = exps.iter().map(C::scalar_to_bytes).collect();
    let num_bits = scalar_bytes[0].len() * 8;
    let num_windows = (num_bits + window_size - 1) / window_size;

    let window_sums: Vec<C::Point> = (0..num_windows)
        .into_par_iter()
        .map(|window| process_window::<C>(bases, &scalar_bytes, window * window_size, window_size))
        .collect();

    // highest window first, shifting the accumulator left by one window each step
    let mut result = C::Point::identity();
    for window_sum in window_sums.into_iter().rev() {
        for _ in 0..window_size {
            result = result.double();
        }
        result += window_sum;
    }

    GroupElement(result)
}

fn process_window<C: Curve>(
    bases: &[GroupElement<C>],
    scalar_bytes: &[Vec<u8>],
    bit_start: usize,
    window_size: usize,
) -> C::Point {
    let mut buckets = vec![C::Point::identity(); (1 << window_size) - 1];

    for (point, bytes) in bases.iter().zip(scalar_bytes.iter()) {
        let bucket_idx = extract_window_bits(bytes, bit_start, window_size);
        if bucket_idx > 0 {
            buckets[bucket_idx - 1] += point.0;
        }
    }

    let mut result = C::Point::identity();
    let mut running_sum = C::Point::identity();
    for bucket in buckets.into_iter().rev() {
        running_sum += bucket;
        result += running_sum;
    }

    result
}

/// Read `width` bits starting at bit `bit_start` (counted from the least significant bit) of a
/// big-endian integer
fn extract_window_bits(be_bytes: &[u8], bit_start: usize, width: usize) -> usize {
    let mut result = 0usize;

    for offset in 0..width {
        let bit_idx = bit_start + offset;
        let byte_idx = bit_idx / 8;
        if byte_idx >= be_bytes.len() {
            break;
        }
        let bit = (be_bytes[be_bytes.len() - 1 - byte_idx] >> (bit_idx % 8)) & 1;
        result |= (bit as usize) << offset;
    }

    result
}

fn optimal_window_size(n: usize) -> usize {
    if n <= 128 {
        4
    } else if n <= 512 {
        5
    } else if n <= 2048 {
        6
    } else if n <= 8192 {
        7
    } else {
        8
    }
}
