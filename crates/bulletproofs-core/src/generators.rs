//! Generator derivation and caching
//!
//! All generators besides the curve's base point are nothing-up-my-sleeve points obtained by
//! hashing fixed public seeds to the curve, so nobody knows a discrete log relation between them.
//! They are a pure function of the curve, which makes them safe to derive once and share.

use crate::{inner_product, vector_exp, BulletproofsError, BulletproofsResult, Curve, GroupElement};
use std::sync::{PoisonError, RwLock};

/// Seed for the blinding generator `H` and the per-index vector generators
pub const SEED_H: &[u8] = b"BulletproofsDoesNotNeedTrustedSetupH";

/// Seed for the inner product generator `U`
pub const SEED_U: &[u8] = b"BulletproofsDoesNotNeedTrustedSetupU";

/// Derive the `index`-th left vector generator
pub fn vector_generator_g<C: Curve>(index: usize) -> BulletproofsResult<GroupElement<C>> {
    GroupElement::hash_to_point(&indexed_seed(b"g", index))
}

/// Derive the `index`-th right vector generator
pub fn vector_generator_h<C: Curve>(index: usize) -> BulletproofsResult<GroupElement<C>> {
    GroupElement::hash_to_point(&indexed_seed(b"h", index))
}

fn indexed_seed(side: &[u8], index: usize) -> Vec<u8> {
    let mut seed = SEED_H.to_vec();
    seed.extend_from_slice(side);
    seed.extend_from_slice(index.to_string().as_bytes());
    seed
}

/// Process-wide parameters for one curve
///
/// Constructed once per curve through [`Curve::params`]. The vector generators are cached behind
/// a read-mostly lock and only ever grow.
pub struct CurveParams<C: Curve> {
    /// Base point, the value generator of Pedersen commitments
    pub g: GroupElement<C>,
    /// Blinding generator
    pub h: GroupElement<C>,
    /// Inner product generator
    pub u: GroupElement<C>,
    vectors: RwLock<(Vec<GroupElement<C>>, Vec<GroupElement<C>>)>,
}

impl<C: Curve> CurveParams<C> {
    /// Derive the fixed generators for `C`
    pub fn new() -> BulletproofsResult<Self> {
        let params = Self {
            g: GroupElement::generator(),
            h: GroupElement::hash_to_point(SEED_H)?,
            u: GroupElement::hash_to_point(SEED_U)?,
            vectors: RwLock::new((Vec::new(), Vec::new())),
        };
        tracing::debug!(curve = C::NAME, "derived curve parameters");
        Ok(params)
    }

    /// Snapshot of the first `length` vector generators, deriving any that are missing
    pub fn generators(&self, length: usize) -> BulletproofsResult<GeneratorSet<C>> {
        {
            let cached = self.vectors.read().unwrap_or_else(PoisonError::into_inner);
            if cached.0.len() >= length {
                return Ok(self.snapshot(&cached.0[..length], &cached.1[..length]));
            }
        }

        let mut cached = self.vectors.write().unwrap_or_else(PoisonError::into_inner);
        // another writer may have extended the cache in the meantime
        for i in cached.0.len()..length {
            let g = vector_generator_g::<C>(i)?;
            let h = vector_generator_h::<C>(i)?;
            cached.0.push(g);
            cached.1.push(h);
        }
        tracing::debug!(curve = C::NAME, length, "extended generator cache");

        Ok(self.snapshot(&cached.0[..length], &cached.1[..length]))
    }

    fn snapshot(&self, g_vec: &[GroupElement<C>], h_vec: &[GroupElement<C>]) -> GeneratorSet<C> {
        GeneratorSet {
            g: self.g,
            h: self.h,
            u: self.u,
            g_vec: g_vec.to_vec(),
            h_vec: h_vec.to_vec(),
        }
    }
}

/// Generator set for Bulletproofs operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorSet<C: Curve> {
    /// Primary generator G
    pub g: GroupElement<C>,
    /// Secondary generator H
    pub h: GroupElement<C>,
    /// Generator for inner product
    pub u: GroupElement<C>,
    /// Vector generators for left side
    pub g_vec: Vec<GroupElement<C>>,
    /// Vector generators for right side
    pub h_vec: Vec<GroupElement<C>>,
}

impl<C: Curve> GeneratorSet<C> {
    /// The cached generator set of the given vector length
    pub fn new(vector_length: usize) -> BulletproofsResult<Self> {
        C::params()?.generators(vector_length)
    }

    /// Get the vector length
    pub fn vector_length(&self) -> usize {
        self.g_vec.len()
    }

    /// Compute vector commitment: g^a * h^b where a, b are vectors
    pub fn vector_commit(&self, a: &[C::Scalar], b: &[C::Scalar]) -> BulletproofsResult<GroupElement<C>> {
        if a.len() != b.len() {
            return Err(BulletproofsError::VectorLengthMismatch {
                expected: a.len(),
                actual: b.len(),
            });
        }

        if a.len() > self.vector_length() {
            return Err(BulletproofsError::InsufficientGenerators {
                needed: a.len(),
                available: self.vector_length(),
            });
        }

        let scalars: Vec<C::Scalar> = a.iter().chain(b.iter()).copied().collect();
        let points: Vec<GroupElement<C>> = self.g_vec[..a.len()]
            .iter()
            .chain(self.h_vec[..b.len()].iter())
            .copied()
            .collect();

        vector_exp(&points, &scalars)
    }

    /// Compute inner product commitment: g^a * h^b * u^<a,b>
    pub fn inner_product_commit(&self, a: &[C::Scalar], b: &[C::Scalar]) -> BulletproofsResult<GroupElement<C>> {
        let vector_commit = self.vector_commit(a, b)?;
        Ok(vector_commit + self.u * inner_product(a, b)?)
    }

    /// Create a subset of generators with the specified length
    pub fn subset(&self, length: usize) -> BulletproofsResult<GeneratorSet<C>> {
        if length > self.vector_length() {
            return Err(BulletproofsError::InsufficientGenerators {
                needed: length,
                available: self.vector_length(),
            });
        }

        Ok(GeneratorSet {
            g: self.g,
            h: self.h,
            u: self.u,
            g_vec: self.g_vec[..length].to_vec(),
            h_vec: self.h_vec[..length].to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curves::{Jubjub, Secp256k1};
    use k256::Scalar;

    #[test]
    fn test_generator_set_creation() {
        let generators = GeneratorSet::<Secp256k1>::new(8).unwrap();
        assert_eq!(generators.vector_length(), 8);
        assert_eq!(generators.g_vec.len(), 8);
        assert_eq!(generators.h_vec.len(), 8);
    }

    #[test]
    fn test_generators_are_deterministic_and_distinct() {
        let small = GeneratorSet::<Jubjub>::new(4).unwrap();
        let large = GeneratorSet::<Jubjub>::new(16).unwrap();
        assert_eq!(small, large.subset(4).unwrap());
        assert_eq!(small.g_vec[3], vector_generator_g::<Jubjub>(3).unwrap());

        for i in 0..16 {
            assert_ne!(large.g_vec[i], large.h_vec[i]);
            assert_ne!(large.g_vec[i], large.g);
            for j in 0..i {
                assert_ne!(large.g_vec[i], large.g_vec[j]);
            }
        }
    }

    #[test]
    fn test_cache_is_shared_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|i| std::thread::spawn(move || GeneratorSet::<Secp256k1>::new(8 + 4 * i).unwrap()))
            .collect();
        let sets: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        for set in &sets {
            assert_eq!(set.g_vec[..8], sets[0].g_vec[..]);
        }
    }

    #[test]
    fn test_vector_commit() {
        let generators = GeneratorSet::<Secp256k1>::new(4).unwrap();
        let a = vec![Scalar::from(1u64), Scalar::from(2u64), Scalar::from(3u64), Scalar::from(4u64)];
        let b = vec![Scalar::from(5u64), Scalar::from(6u64), Scalar::from(7u64), Scalar::from(8u64)];

        let commitment = generators.vector_commit(&a, &b).unwrap();
        assert!(!commitment.is_identity());
        assert!(generators.vector_commit(&a, &b[..3]).is_err());

        let too_long = vec![Scalar::from(1u64); 5];
        assert!(generators.vector_commit(&too_long, &too_long).is_err());
    }

    #[test]
    fn test_inner_product_commit() {
        let generators = GeneratorSet::<Secp256k1>::new(2).unwrap();
        let a = vec![Scalar::from(3u64), Scalar::from(4u64)];
        let b = vec![Scalar::from(5u64), Scalar::from(6u64)];

        let commitment = generators.inner_product_commit(&a, &b).unwrap();

        // g_0^3 * g_1^4 * h_0^5 * h_1^6 * u^(3*5 + 4*6)
        let expected = generators.g_vec[0] * Scalar::from(3u64)
            + generators.g_vec[1] * Scalar::from(4u64)
            + generators.h_vec[0] * Scalar::from(5u64)
            + generators.h_vec[1] * Scalar::from(6u64)
            + generators.u * Scalar::from(39u64);

        assert_eq!(commitment, expected);
    }
}
