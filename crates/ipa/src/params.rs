//! Public statement of an inner product argument

use bulletproofs_core::{
    hash_ip, log2_exact, BulletproofsError, BulletproofsResult, Curve, GeneratorSet, GroupElement,
};

/// Generators, commitment and claimed inner product shared by prover and verifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InnerProductParams<C: Curve> {
    /// Vector length, a power of two
    pub n: usize,
    pub g_vec: Vec<GroupElement<C>>,
    pub h_vec: Vec<GroupElement<C>>,
    /// Inner product generator
    pub u: GroupElement<C>,
    /// Commitment `g^a * h^b`
    pub p: GroupElement<C>,
    /// Claimed `<a, b>`
    pub c: C::Scalar,
}

impl<C: Curve> InnerProductParams<C> {
    /// Statement over explicit generators
    pub fn new(
        g_vec: Vec<GroupElement<C>>,
        h_vec: Vec<GroupElement<C>>,
        u: GroupElement<C>,
        p: GroupElement<C>,
        c: C::Scalar,
    ) -> BulletproofsResult<Self> {
        let params = Self {
            n: g_vec.len(),
            g_vec,
            h_vec,
            u,
            p,
            c,
        };
        params.validate()?;
        Ok(params)
    }

    /// Statement over the curve's standard generators of length `n`
    pub fn setup(n: usize, p: GroupElement<C>, c: C::Scalar) -> BulletproofsResult<Self> {
        log2_exact(n)?;
        let generators = GeneratorSet::<C>::new(n)?;
        Self::new(generators.g_vec, generators.h_vec, generators.u, p, c)
    }

    /// Check that the vectors agree with `n` and that `n` is a power of two
    pub fn validate(&self) -> BulletproofsResult<()> {
        log2_exact(self.n)?;
        for len in [self.g_vec.len(), self.h_vec.len()] {
            if len != self.n {
                return Err(BulletproofsError::VectorLengthMismatch {
                    expected: self.n,
                    actual: len,
                });
            }
        }
        Ok(())
    }

    /// Number of folding rounds
    pub fn rounds(&self) -> usize {
        self.n.trailing_zeros() as usize
    }

    /// Bind the statement to the transcript: returns `(ux, P * ux^c)`
    pub(crate) fn bind(&self) -> (GroupElement<C>, GroupElement<C>) {
        let x = hash_ip(&self.g_vec, &self.h_vec, &self.p, &self.c);
        let ux = self.u * x;
        (ux, self.p + ux * self.c)
    }
}
