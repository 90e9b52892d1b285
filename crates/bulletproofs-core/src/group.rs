//! Group operations and point utilities

use crate::{BulletproofsError, BulletproofsResult, Curve};
use group::{Group, GroupEncoding};
use serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha512};
use std::fmt;

/// Number of try-and-increment attempts before hash-to-curve gives up
pub const HASH_TO_CURVE_ATTEMPTS: usize = 256;

/// A point on the curve `C` with additional utility methods
pub struct GroupElement<C: Curve>(pub C::Point);

impl<C: Curve> GroupElement<C> {
    /// Identity element
    pub fn identity() -> Self {
        Self(C::Point::identity())
    }

    /// The curve's base point
    pub fn generator() -> Self {
        Self(C::Point::generator())
    }

    /// Fixed-base scalar multiplication `g^k`
    pub fn mul_base(scalar: &C::Scalar) -> Self {
        Self(C::Point::generator() * scalar)
    }

    /// Whether this is the identity element
    pub fn is_identity(&self) -> bool {
        self.0.is_identity().into()
    }

    /// Fixed-width encoding of this point
    pub fn to_bytes(&self) -> Vec<u8> {
        self.0.to_bytes().as_ref().to_vec()
    }

    /// Decode a point, rejecting encodings that are not on the curve
    pub fn from_bytes(bytes: &[u8]) -> BulletproofsResult<Self> {
        let mut repr = <C::Point as GroupEncoding>::Repr::default();
        if bytes.len() != repr.as_ref().len() {
            return Err(BulletproofsError::SerializationError(format!(
                "{} point must be {} bytes, got {}",
                C::NAME,
                repr.as_ref().len(),
                bytes.len()
            )));
        }
        repr.as_mut().copy_from_slice(bytes);
        Option::from(C::Point::from_bytes(&repr))
            .map(Self)
            .ok_or_else(|| BulletproofsError::InvalidProof("Invalid compressed point".to_string()))
    }

    /// Deterministically derive a point with no known discrete log relative to the base point.
    ///
    /// Try-and-increment: for `i = 0, 1, ...` hash `i || seed` with SHA-512 and ask the curve
    /// whether the digest encodes a point. The identity is never returned.
    pub fn hash_to_point(seed: &[u8]) -> BulletproofsResult<Self> {
        for attempt in 0..HASH_TO_CURVE_ATTEMPTS {
            let mut hasher = Sha512::new();
            hasher.update([attempt as u8]);
            hasher.update(seed);
            let mut candidate = [0u8; 64];
            candidate.copy_from_slice(&hasher.finalize());

            if let Some(point) = C::map_candidate(&candidate) {
                if !bool::from(point.is_identity()) {
                    return Ok(Self(point));
                }
            }
        }

        Err(BulletproofsError::HashToCurveExhausted(
            String::from_utf8_lossy(seed).into_owned(),
        ))
    }

    /// Perform multi-scalar multiplication
    pub fn multiscalar_mul(scalars: &[C::Scalar], points: &[Self]) -> BulletproofsResult<Self> {
        crate::msm::vector_exp(points, scalars)
    }
}

impl<C: Curve> Clone for GroupElement<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: Curve> Copy for GroupElement<C> {}

impl<C: Curve> PartialEq for GroupElement<C> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<C: Curve> Eq for GroupElement<C> {}

impl<C: Curve> fmt::Debug for GroupElement<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("GroupElement").field(&self.0).finish()
    }
}

impl<C: Curve> Default for GroupElement<C> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<C: Curve> std::ops::Add for GroupElement<C> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl<C: Curve> std::ops::AddAssign for GroupElement<C> {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl<C: Curve> std::ops::Sub for GroupElement<C> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl<C: Curve> std::ops::Mul<C::Scalar> for GroupElement<C> {
    type Output = Self;

    fn mul(self, scalar: C::Scalar) -> Self {
        Self(self.0 * scalar)
    }
}

impl<C: Curve> std::ops::Neg for GroupElement<C> {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl<C: Curve> std::iter::Sum for GroupElement<C> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::identity(), |acc, p| acc + p)
    }
}

impl<C: Curve> Serialize for GroupElement<C> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bytes(&self.to_bytes())
    }
}

impl<'de, C: Curve> Deserialize<'de> for GroupElement<C> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bytes = Vec::<u8>::deserialize(deserializer)?;
        Self::from_bytes(&bytes).map_err(D::Error::custom)
    }
}

/// Pointwise addition of two point vectors
pub fn vector_ec_add<C: Curve>(
    a: &[GroupElement<C>],
    b: &[GroupElement<C>],
) -> BulletproofsResult<Vec<GroupElement<C>>> {
    if a.len() != b.len() {
        return Err(BulletproofsError::VectorLengthMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }

    Ok(a.iter().zip(b.iter()).map(|(ai, bi)| *ai + *bi).collect())
}

/// Multiply every point of a vector by its own scalar
pub fn vector_ec_scale<C: Curve>(
    points: &[GroupElement<C>],
    scalars: &[C::Scalar],
) -> BulletproofsResult<Vec<GroupElement<C>>> {
    if points.len() != scalars.len() {
        return Err(BulletproofsError::VectorLengthMismatch {
            expected: points.len(),
            actual: scalars.len(),
        });
    }

    Ok(points.iter().zip(scalars.iter()).map(|(p, s)| *p * *s).collect())
}
