//! Utility functions for Bulletproofs operations

use crate::{BulletproofsError, BulletproofsResult};
use ff::Field;

fn check_lengths<F>(a: &[F], b: &[F]) -> BulletproofsResult<()> {
    if a.len() != b.len() {
        return Err(BulletproofsError::VectorLengthMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }
    Ok(())
}

/// Compute powers of a scalar: [1, x, x^2, x^3, ..., x^(n-1)]
pub fn scalar_powers<F: Field>(x: &F, n: usize) -> Vec<F> {
    let mut powers = Vec::with_capacity(n);
    let mut current = F::ONE;

    for _ in 0..n {
        powers.push(current);
        current *= x;
    }

    powers
}

/// Sum of the first `n` powers of `x`: 1 + x + ... + x^(n-1)
pub fn sum_of_powers<F: Field>(x: &F, n: usize) -> F {
    scalar_powers(x, n).into_iter().sum()
}

/// Compute the inner product of two scalar vectors
pub fn inner_product<F: Field>(a: &[F], b: &[F]) -> BulletproofsResult<F> {
    check_lengths(a, b)?;
    Ok(a.iter().zip(b.iter()).map(|(ai, bi)| *ai * bi).sum())
}

/// Hadamard (element-wise) product of two scalar vectors
pub fn hadamard_product<F: Field>(a: &[F], b: &[F]) -> BulletproofsResult<Vec<F>> {
    check_lengths(a, b)?;
    Ok(a.iter().zip(b.iter()).map(|(ai, bi)| *ai * bi).collect())
}

/// Add two scalar vectors element-wise
pub fn vector_add<F: Field>(a: &[F], b: &[F]) -> BulletproofsResult<Vec<F>> {
    check_lengths(a, b)?;
    Ok(a.iter().zip(b.iter()).map(|(ai, bi)| *ai + bi).collect())
}

/// Subtract two scalar vectors element-wise: a - b
pub fn vector_sub<F: Field>(a: &[F], b: &[F]) -> BulletproofsResult<Vec<F>> {
    check_lengths(a, b)?;
    Ok(a.iter().zip(b.iter()).map(|(ai, bi)| *ai - bi).collect())
}

/// Scale a vector by a scalar
pub fn vector_scale<F: Field>(vec: &[F], scalar: &F) -> Vec<F> {
    vec.iter().map(|v| *v * scalar).collect()
}

/// Add the same scalar to every element
pub fn vector_add_scalar<F: Field>(vec: &[F], scalar: &F) -> Vec<F> {
    vec.iter().map(|v| *v + scalar).collect()
}

/// Construct the little-endian bit decomposition of a value
pub fn bit_decomposition<F: Field>(value: u64, bits: usize) -> Vec<F> {
    (0..bits)
        .map(|i| {
            if i < 64 && (value >> i) & 1 == 1 {
                F::ONE
            } else {
                F::ZERO
            }
        })
        .collect()
}

/// Check if a number is a power of 2
pub fn is_power_of_two(n: usize) -> bool {
    n != 0 && (n & (n - 1)) == 0
}

/// log2 of a power of two, rejecting anything else
pub fn log2_exact(n: usize) -> BulletproofsResult<usize> {
    if !is_power_of_two(n) {
        return Err(BulletproofsError::NotPowerOfTwo(n));
    }
    Ok(n.trailing_zeros() as usize)
}
