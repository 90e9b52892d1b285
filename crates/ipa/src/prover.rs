//! Inner Product Argument prover implementation

use crate::{InnerProductParams, InnerProductProof};
use bulletproofs_core::{
    hash_round, inner_product, scalar::invert, vector_exp, BulletproofsError, BulletproofsResult,
    Curve, GroupElement,
};

/// Inner Product Argument prover
#[derive(Debug, Clone)]
pub struct InnerProductProver<C: Curve> {
    params: InnerProductParams<C>,
}

impl<C: Curve> InnerProductProver<C> {
    /// Create a new IPA prover for the given statement
    pub fn new(params: InnerProductParams<C>) -> Self {
        Self { params }
    }

    /// Create an inner product proof
    ///
    /// Proves knowledge of vectors `a` and `b` such that `P = g^a * h^b` and `<a,b> = c`.
    /// The witness must match the statement: a wrong `<a,b>` is rejected up front.
    #[tracing::instrument(name = "InnerProductProver::prove", level = "debug", skip_all, fields(n = self.params.n))]
    pub fn prove(&self, a: &[C::Scalar], b: &[C::Scalar]) -> BulletproofsResult<InnerProductProof<C>> {
        let params = &self.params;
        params.validate()?;

        for len in [a.len(), b.len()] {
            if len != params.n {
                return Err(BulletproofsError::VectorLengthMismatch {
                    expected: params.n,
                    actual: len,
                });
            }
        }

        if inner_product(a, b)? != params.c {
            return Err(BulletproofsError::InvalidParameters(
                "witness inner product does not match the claimed value".to_string(),
            ));
        }

        let (ux, _) = params.bind();

        let mut l_vec = Vec::with_capacity(params.rounds());
        let mut r_vec = Vec::with_capacity(params.rounds());

        let mut current_a = a.to_vec();
        let mut current_b = b.to_vec();
        let mut current_g = params.g_vec.clone();
        let mut current_h = params.h_vec.clone();

        while current_a.len() > 1 {
            let m = current_a.len() / 2;

            let (a_l, a_r) = current_a.split_at(m);
            let (b_l, b_r) = current_b.split_at(m);
            let (g_l, g_r) = current_g.split_at(m);
            let (h_l, h_r) = current_h.split_at(m);

            let c_l = inner_product(a_l, b_r)?;
            let c_r = inner_product(a_r, b_l)?;

            // L = g_R^{a_L} * h_L^{b_R} * ux^{<a_L, b_R>}
            let l = cross_term(g_r, a_l, h_l, b_r, &ux, c_l)?;
            // R = g_L^{a_R} * h_R^{b_L} * ux^{<a_R, b_L>}
            let r = cross_term(g_l, a_r, h_r, b_l, &ux, c_r)?;

            let x = hash_round(&l, &r);
            let x_inv = invert(&x)?;
            tracing::trace!(round = l_vec.len(), size = m, "folded");

            l_vec.push(l);
            r_vec.push(r);

            let mut folded_a = Vec::with_capacity(m);
            let mut folded_b = Vec::with_capacity(m);
            let mut folded_g = Vec::with_capacity(m);
            let mut folded_h = Vec::with_capacity(m);

            for i in 0..m {
                folded_a.push(a_l[i] * x + a_r[i] * x_inv);
                folded_b.push(b_l[i] * x_inv + b_r[i] * x);
                folded_g.push(g_l[i] * x_inv + g_r[i] * x);
                folded_h.push(h_l[i] * x + h_r[i] * x_inv);
            }

            current_a = folded_a;
            current_b = folded_b;
            current_g = folded_g;
            current_h = folded_h;
        }

        Ok(InnerProductProof {
            n: params.n,
            l_vec,
            r_vec,
            a: current_a[0],
            b: current_b[0],
        })
    }
}

fn cross_term<C: Curve>(
    g: &[GroupElement<C>],
    a: &[C::Scalar],
    h: &[GroupElement<C>],
    b: &[C::Scalar],
    u: &GroupElement<C>,
    c: C::Scalar,
) -> BulletproofsResult<GroupElement<C>> {
    let bases: Vec<GroupElement<C>> = g.iter().chain(h.iter()).chain(std::iter::once(u)).copied().collect();
    let scalars: Vec<C::Scalar> = a.iter().chain(b.iter()).copied().chain(std::iter::once(c)).collect();
    vector_exp(&bases, &scalars)
}

/// Prove `params` with witness `(a, b)`
pub fn prove_inner_product<C: Curve>(
    params: &InnerProductParams<C>,
    a: &[C::Scalar],
    b: &[C::Scalar],
) -> BulletproofsResult<InnerProductProof<C>> {
    InnerProductProver::new(params.clone()).prove(a, b)
}
