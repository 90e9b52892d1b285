//! Range proof verifier implementation

use crate::{setup::update_generators, BulletproofSetupParams, RangeProof};
use bulletproofs_core::{
    range_challenge_x, range_challenges_yz, range_transcript, scalar_powers, sum_of_powers,
    vector_exp, BulletproofsError, BulletproofsResult, Curve, Field, GroupElement,
};
use ipa::{InnerProductParams, InnerProductVerifier};

/// Verifier for range proofs
#[derive(Debug, Clone)]
pub struct RangeVerifier<C: Curve> {
    params: BulletproofSetupParams<C>,
}

impl<C: Curve> RangeVerifier<C> {
    pub fn new(params: BulletproofSetupParams<C>) -> Self {
        Self { params }
    }

    /// Verify a single or aggregated range proof
    ///
    /// `Ok(false)` means one of the three checks failed: the polynomial identity, the
    /// reconstruction of the inner product commitment, or the inner product argument itself.
    /// Proofs whose shape does not fit the parameters are rejected with an error.
    #[tracing::instrument(name = "RangeVerifier::verify", level = "debug", skip_all, fields(n = proof.n, m = proof.commitments.len()))]
    pub fn verify(&self, proof: &RangeProof<C>) -> BulletproofsResult<bool> {
        let params = &self.params;
        let bits = params.n;
        let m = proof.commitments.len();

        if proof.n != bits {
            return Err(BulletproofsError::InvalidProof(format!(
                "proof is for {} bits, parameters are for {}",
                proof.n, bits
            )));
        }
        let nm = params
            .vector_length(m)
            .map_err(|e| BulletproofsError::InvalidProof(e.to_string()))?;
        if proof.ipp.n != nm {
            return Err(BulletproofsError::InvalidProof(format!(
                "inner product proof has length {}, expected {}",
                proof.ipp.n, nm
            )));
        }

        let mut transcript = range_transcript(bits, &proof.commitments);
        let (y, z) = range_challenges_yz(&mut transcript, &proof.a, &proof.s);
        let x = range_challenge_x(&mut transcript, &proof.t1, &proof.t2);
        let y_inv: Option<C::Scalar> = y.invert().into();
        let Some(y_inv) = y_inv else {
            tracing::debug!("zero challenge y");
            return Ok(false);
        };

        let gens = params.pedersen_gens();
        let y_powers = scalar_powers(&y, nm);
        let two_powers = scalar_powers(&C::Scalar::from(2u64), bits);
        let z_weights: Vec<C::Scalar> = scalar_powers(&z, m + 3).split_off(2);

        // delta(y, z) = (z - z^2) <1, y^nm> - sum_j z^{3+j} <1, 2^n>
        let z_sq = z.square();
        let sum_two = sum_of_powers(&C::Scalar::from(2u64), bits);
        let z_cubes: C::Scalar = z_weights[1..].iter().copied().sum();
        let delta = (z - z_sq) * y_powers.iter().copied().sum::<C::Scalar>() - z_cubes * sum_two;

        // g^t_hat h^taux == sum_j V_j^{z^{2+j}} g^delta T1^x T2^{x^2}
        let lhs = gens.commit(proof.t_hat, proof.taux);
        let bases: Vec<GroupElement<C>> = proof
            .commitments
            .iter()
            .chain([&gens.g, &proof.t1, &proof.t2])
            .copied()
            .collect();
        let exps: Vec<C::Scalar> = z_weights[..m]
            .iter()
            .copied()
            .chain([delta, x, x.square()])
            .collect();
        if lhs != vector_exp(&bases, &exps)? {
            tracing::debug!("polynomial identity check failed");
            return Ok(false);
        }

        // A S^x Gg^{-z} h'^{z y^i + z^{2+j} 2^{i mod n}} == h^mu Commit
        let gg = &params.gg[..nm];
        let hprime = update_generators(&params.hh[..nm], &y_inv);
        let bases: Vec<GroupElement<C>> = [&proof.a, &proof.s]
            .into_iter()
            .chain(gg)
            .chain(hprime.iter())
            .copied()
            .collect();
        let exps: Vec<C::Scalar> = [C::Scalar::ONE, x]
            .into_iter()
            .chain(std::iter::repeat(-z).take(nm))
            .chain((0..nm).map(|i| z * y_powers[i] + z_weights[i / bits] * two_powers[i % bits]))
            .collect();
        if vector_exp(&bases, &exps)? != gens.h * proof.mu + proof.commit {
            tracing::debug!("inner product commitment check failed");
            return Ok(false);
        }

        let ipa_params = InnerProductParams::new(gg.to_vec(), hprime, params.u, proof.commit, proof.t_hat)?;
        if !InnerProductVerifier::new(ipa_params).verify(&proof.ipp)? {
            tracing::debug!("inner product argument check failed");
            return Ok(false);
        }

        Ok(true)
    }
}

impl<C: Curve> RangeProof<C> {
    /// Verify this proof against `params`
    pub fn verify(&self, params: &BulletproofSetupParams<C>) -> BulletproofsResult<bool> {
        RangeVerifier::new(params.clone()).verify(self)
    }
}
