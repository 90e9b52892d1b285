//! Curve abstraction
//!
//! Every proof in this workspace is generic over a [`Curve`]: a prime-order group together with
//! its scalar field. The group and field arithmetic come from the `group` and `ff` traits; the
//! trait only adds what those crates leave open: a name, the byte order of canonical scalars,
//! the candidate-to-point map used by try-and-increment hash-to-curve, and a handle on the
//! lazily-derived [`CurveParams`].

use crate::{BulletproofsError, BulletproofsResult, CurveParams};
use ff::PrimeField;
use group::{Group, GroupEncoding};
use std::fmt::Debug;

/// Byte order of a backend's canonical scalar representation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endianness {
    /// Least significant byte first
    Little,
    /// Most significant byte first
    Big,
}

/// A prime-order group usable for commitments, ElGamal and range proofs
pub trait Curve: Clone + Copy + Debug + Default + PartialEq + Eq + Send + Sync + 'static {
    /// Scalar field of the group (order `n`)
    type Scalar: PrimeField;

    /// Group element
    type Point: Group<Scalar = Self::Scalar> + GroupEncoding;

    /// Human readable curve name
    const NAME: &'static str;

    /// Byte order of `Self::Scalar::to_repr`
    const SCALAR_ENDIANNESS: Endianness;

    /// Interpret 64 bytes of hash output as a candidate point encoding.
    ///
    /// Returns `None` when the candidate is not on the curve. Implementations must map into the
    /// prime-order subgroup (clearing the cofactor where there is one).
    fn map_candidate(candidate: &[u8; 64]) -> Option<Self::Point>;

    /// Process-wide parameters for this curve, derived once on first use
    fn params() -> BulletproofsResult<&'static CurveParams<Self>>;

    /// Width of an encoded point in bytes
    fn point_size() -> usize {
        <Self::Point as GroupEncoding>::Repr::default().as_ref().len()
    }

    /// Width of an encoded scalar in bytes
    fn scalar_size() -> usize {
        <Self::Scalar as PrimeField>::Repr::default().as_ref().len()
    }

    /// Fixed-width big-endian encoding of a scalar
    fn scalar_to_bytes(scalar: &Self::Scalar) -> Vec<u8> {
        let mut bytes = scalar.to_repr().as_ref().to_vec();
        if Self::SCALAR_ENDIANNESS == Endianness::Little {
            bytes.reverse();
        }
        bytes
    }

    /// Decode a fixed-width big-endian scalar, rejecting values `>= n`
    fn scalar_from_bytes(bytes: &[u8]) -> BulletproofsResult<Self::Scalar> {
        let mut repr = <Self::Scalar as PrimeField>::Repr::default();
        if bytes.len() != repr.as_ref().len() {
            return Err(BulletproofsError::SerializationError(format!(
                "{} scalar must be {} bytes, got {}",
                Self::NAME,
                repr.as_ref().len(),
                bytes.len()
            )));
        }
        repr.as_mut().copy_from_slice(bytes);
        if Self::SCALAR_ENDIANNESS == Endianness::Little {
            repr.as_mut().reverse();
        }
        Option::from(Self::Scalar::from_repr(repr)).ok_or_else(|| {
            BulletproofsError::SerializationError(format!("non-canonical {} scalar", Self::NAME))
        })
    }
}
