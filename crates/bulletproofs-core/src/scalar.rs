//! Scalar field helpers
//!
//! Field arithmetic itself (`+`, `-`, `*`, inversion, sampling) comes from [`ff::Field`]; these
//! helpers cover conversions from machine integers, checked inversion, hash reduction and the
//! `serde` adapter for scalars embedded in proofs.

use crate::{BulletproofsError, BulletproofsResult};
use ff::{Field, PrimeField};
use rand_core::{CryptoRng, RngCore};

/// Lift a signed integer into the field, mapping `-v` to `n - v`
pub fn scalar_from_i64<F: PrimeField>(value: i64) -> F {
    let magnitude = F::from(value.unsigned_abs());
    if value < 0 {
        -magnitude
    } else {
        magnitude
    }
}

/// Modular inverse, failing for zero
pub fn invert<F: Field>(value: &F) -> BulletproofsResult<F> {
    Option::from(value.invert()).ok_or(BulletproofsError::NotInvertible)
}

/// Uniform scalar in `[0, n)`
pub fn random_scalar<F: Field, R: RngCore + CryptoRng>(rng: &mut R) -> F {
    F::random(&mut *rng)
}

/// Uniform scalar in `[1, n)`, resampling on zero
pub fn random_nonzero_scalar<F: Field, R: RngCore + CryptoRng>(rng: &mut R) -> F {
    loop {
        let candidate = F::random(&mut *rng);
        if !bool::from(candidate.is_zero()) {
            return candidate;
        }
    }
}

/// Interpret big-endian bytes as an integer and reduce it modulo `n`
pub fn scalar_from_bytes_mod_order<F: PrimeField>(bytes: &[u8]) -> F {
    let radix = F::from(256u64);
    bytes
        .iter()
        .fold(F::ZERO, |acc, byte| acc * radix + F::from(u64::from(*byte)))
}

/// `serde` adapter for a single scalar, in the fixed-width big-endian form of
/// [`Curve::scalar_to_bytes`](crate::Curve::scalar_to_bytes)
pub mod scalar_serde {
    use ff::PrimeField;
    use serde::{de::Error as _, Deserialize, Deserializer, Serializer};

    // `to_repr` is little-endian exactly when the encoding of one starts with 0x01
    fn repr_is_little_endian<F: PrimeField>() -> bool {
        F::ONE.to_repr().as_ref().first() == Some(&1)
    }

    pub fn serialize<F: PrimeField, S: Serializer>(scalar: &F, serializer: S) -> Result<S::Ok, S::Error> {
        let mut bytes = scalar.to_repr().as_ref().to_vec();
        if repr_is_little_endian::<F>() {
            bytes.reverse();
        }
        serializer.serialize_bytes(&bytes)
    }

    pub fn deserialize<'de, F: PrimeField, D: Deserializer<'de>>(deserializer: D) -> Result<F, D::Error> {
        let bytes = Vec::<u8>::deserialize(deserializer)?;
        let mut repr = F::Repr::default();
        if bytes.len() != repr.as_ref().len() {
            return Err(D::Error::custom("scalar has the wrong length"));
        }
        repr.as_mut().copy_from_slice(&bytes);
        if repr_is_little_endian::<F>() {
            repr.as_mut().reverse();
        }
        Option::from(F::from_repr(repr)).ok_or_else(|| D::Error::custom("non-canonical scalar"))
    }
}
