//! Public parameters of the range proof

use crate::config::{validate_aggregation, validate_bit_length, RangeProofConfig};
use bulletproofs_core::{
    BulletproofsError, BulletproofsResult, Curve, Field, GeneratorSet, GroupElement, PedersenGens,
};

/// Generators shared by range provers and verifiers
///
/// `gg` and `hh` hold `n * m` per-bit generators; proofs over fewer values use a prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulletproofSetupParams<C: Curve> {
    /// Bits per value
    pub n: usize,
    /// Maximum number of aggregated values
    pub m: usize,
    /// Value generator of the commitments
    pub g: GroupElement<C>,
    /// Blinding generator of the commitments
    pub h: GroupElement<C>,
    /// Inner product generator
    pub u: GroupElement<C>,
    pub gg: Vec<GroupElement<C>>,
    pub hh: Vec<GroupElement<C>>,
    /// Fan batch work out over the rayon pool
    pub parallel: bool,
}

impl<C: Curve> BulletproofSetupParams<C> {
    /// Parameters for single-value proofs of `n` bits
    pub fn setup(n: usize) -> BulletproofsResult<Self> {
        Self::setup_aggregate(n, 1)
    }

    /// Parameters for proofs of up to `m` values of `n` bits each
    pub fn setup_aggregate(n: usize, m: usize) -> BulletproofsResult<Self> {
        validate_bit_length(n)?;
        validate_aggregation(m)?;

        let generators = GeneratorSet::<C>::new(n * m)?;
        tracing::debug!(curve = C::NAME, n, m, "range proof setup");

        Ok(Self {
            n,
            m,
            g: generators.g,
            h: generators.h,
            u: generators.u,
            gg: generators.g_vec,
            hh: generators.h_vec,
            parallel: true,
        })
    }

    pub fn from_config(config: &RangeProofConfig) -> BulletproofsResult<Self> {
        config.validate()?;
        let mut params = Self::setup_aggregate(config.bit_length, config.aggregation)?;
        params.parallel = config.parallel;
        Ok(params)
    }

    /// Replace the commitment generators
    ///
    /// Proving the amount of a twisted ElGamal ciphertext `CR = g^r * h^b` takes the NUMS point as
    /// value generator and the base point as blinding generator.
    pub fn with_commitment_generators(mut self, g: GroupElement<C>, h: GroupElement<C>) -> Self {
        self.g = g;
        self.h = h;
        self
    }

    /// Parameters for twisted ElGamal ciphertexts of this curve
    pub fn for_twisted_elgamal(self) -> BulletproofsResult<Self> {
        let params = C::params()?;
        Ok(self.with_commitment_generators(params.h, params.g))
    }

    /// Commitment generators as a Pedersen pair
    pub fn pedersen_gens(&self) -> PedersenGens<C> {
        PedersenGens::new(self.g, self.h)
    }

    /// Length of the bit vectors for `m` values, checking `m` is supported
    pub(crate) fn vector_length(&self, m: usize) -> BulletproofsResult<usize> {
        validate_aggregation(m)?;
        if m > self.m {
            return Err(BulletproofsError::InsufficientGenerators {
                needed: self.n * m,
                available: self.gg.len(),
            });
        }
        Ok(self.n * m)
    }
}

/// Scale each generator by the matching power of `y^{-1}`: `h'_i = h_i^{y^{-i}}`
pub fn update_generators<C: Curve>(hh: &[GroupElement<C>], y_inv: &C::Scalar) -> Vec<GroupElement<C>> {
    let mut exp = C::Scalar::ONE;
    hh.iter()
        .map(|h| {
            let scaled = *h * exp;
            exp *= y_inv;
            scaled
        })
        .collect()
}
