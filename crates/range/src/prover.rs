//! Range proof prover implementation

use crate::{setup::update_generators, BulletproofSetupParams, RangeProof};
use bulletproofs_core::{
    bit_decomposition, inner_product, range_challenge_x, range_challenges_yz, range_transcript, scalar::{invert, random_scalar, scalar_from_i64},
    scalar_powers, vector_exp, BulletproofsError, BulletproofsResult, Curve, Field, GroupElement,
};
use ipa::{InnerProductParams, InnerProductProver};
use rand_core::{CryptoRng, RngCore};

/// Prover for generating range proofs
#[derive(Debug, Clone)]
pub struct RangeProver<C: Curve> {
    params: BulletproofSetupParams<C>,
}

impl<C: Curve> RangeProver<C> {
    pub fn new(params: BulletproofSetupParams<C>) -> Self {
        Self { params }
    }

    /// Get the parameters used by this prover
    pub fn params(&self) -> &BulletproofSetupParams<C> {
        &self.params
    }

    /// Prove that `secret` lies in `[0, 2^n)`, committing to it with blinding `gamma`
    pub fn prove<R: RngCore + CryptoRng>(
        &self,
        secret: i64,
        gamma: &C::Scalar,
        rng: &mut R,
    ) -> BulletproofsResult<RangeProof<C>> {
        self.prove_aggregate(&[secret], std::slice::from_ref(gamma), rng)
    }

    /// Prove that every secret lies in `[0, 2^n)` with one aggregated proof
    ///
    /// The number of secrets must be a power of two no larger than the setup's `m`.
    #[tracing::instrument(name = "RangeProver::prove_aggregate", level = "debug", skip_all, fields(n = self.params.n, m = secrets.len()))]
    pub fn prove_aggregate<R: RngCore + CryptoRng>(
        &self,
        secrets: &[i64],
        gammas: &[C::Scalar],
        rng: &mut R,
    ) -> BulletproofsResult<RangeProof<C>> {
        let params = &self.params;
        let bits = params.n;
        let m = secrets.len();
        if gammas.len() != m {
            return Err(BulletproofsError::VectorLengthMismatch {
                expected: m,
                actual: gammas.len(),
            });
        }
        let nm = params.vector_length(m)?;

        for &secret in secrets {
            if secret < 0 || secret >= 1i64 << bits {
                return Err(BulletproofsError::RangeConstraintViolation { value: secret, bits });
            }
        }

        let commitments: Vec<GroupElement<C>> = secrets
            .iter()
            .zip(gammas)
            .map(|(secret, gamma)| params.pedersen_gens().commit(scalar_from_i64(*secret), *gamma))
            .collect();

        let gg = &params.gg[..nm];
        let hh = &params.hh[..nm];

        // aL holds the bits of every value, aR = aL - 1
        let a_l: Vec<C::Scalar> = secrets
            .iter()
            .flat_map(|secret| bit_decomposition::<C::Scalar>(*secret as u64, bits))
            .collect();
        let a_r: Vec<C::Scalar> = a_l.iter().map(|bit| *bit - C::Scalar::ONE).collect();

        let alpha = random_scalar::<C::Scalar, _>(rng);
        let a = blinded_vector_commit(&params.h, &alpha, gg, &a_l, hh, &a_r)?;

        let s_l: Vec<C::Scalar> = (0..nm).map(|_| random_scalar(&mut *rng)).collect();
        let s_r: Vec<C::Scalar> = (0..nm).map(|_| random_scalar(&mut *rng)).collect();
        let rho = random_scalar::<C::Scalar, _>(rng);
        let s = blinded_vector_commit(&params.h, &rho, gg, &s_l, hh, &s_r)?;

        let mut transcript = range_transcript(bits, &commitments);
        let (y, z) = range_challenges_yz(&mut transcript, &a, &s);
        let y_inv = invert(&y)?;

        let y_powers = scalar_powers(&y, nm);
        let two_powers = scalar_powers(&C::Scalar::from(2u64), bits);
        // z^{2+j} for value j
        let z_weights: Vec<C::Scalar> = scalar_powers(&z, m + 2).split_off(2);

        // l(X) = (aL - z) + sL X
        // r(X) = y^i (aR + z + sR X) + z^{2+j} 2^{i mod n}
        let l0: Vec<C::Scalar> = a_l.iter().map(|v| *v - z).collect();
        let l1 = s_l;
        let r0: Vec<C::Scalar> = (0..nm)
            .map(|i| y_powers[i] * (a_r[i] + z) + z_weights[i / bits] * two_powers[i % bits])
            .collect();
        let r1: Vec<C::Scalar> = (0..nm).map(|i| y_powers[i] * s_r[i]).collect();

        let t1 = inner_product(&l0, &r1)? + inner_product(&l1, &r0)?;
        let t2 = inner_product(&l1, &r1)?;

        let tau1 = random_scalar::<C::Scalar, _>(rng);
        let tau2 = random_scalar::<C::Scalar, _>(rng);
        let gens = params.pedersen_gens();
        let t1_commit = gens.commit(t1, tau1);
        let t2_commit = gens.commit(t2, tau2);

        let x = range_challenge_x(&mut transcript, &t1_commit, &t2_commit);

        let l: Vec<C::Scalar> = (0..nm).map(|i| l0[i] + l1[i] * x).collect();
        let r: Vec<C::Scalar> = (0..nm).map(|i| r0[i] + r1[i] * x).collect();
        let t_hat = inner_product(&l, &r)?;

        let gamma_term: C::Scalar = z_weights.iter().zip(gammas).map(|(w, gamma)| *w * gamma).sum();
        let taux = tau2 * x.square() + tau1 * x + gamma_term;
        let mu = alpha + rho * x;

        let hprime = update_generators(hh, &y_inv);
        let commit = vector_exp(
            &gg.iter().chain(hprime.iter()).copied().collect::<Vec<_>>(),
            &l.iter().chain(r.iter()).copied().collect::<Vec<_>>(),
        )?;

        let ipa_params = InnerProductParams::new(gg.to_vec(), hprime, params.u, commit, t_hat)?;
        let ipp = InnerProductProver::new(ipa_params).prove(&l, &r)?;

        tracing::debug!(rounds = ipp.num_rounds(), "range proof generated");

        Ok(RangeProof {
            n: bits,
            commitments,
            a,
            s,
            t1: t1_commit,
            t2: t2_commit,
            commit,
            taux,
            mu,
            t_hat,
            ipp,
        })
    }
}

/// `h^blinding * g^a * h_vec^b`
pub(crate) fn blinded_vector_commit<C: Curve>(
    h: &GroupElement<C>,
    blinding: &C::Scalar,
    g_vec: &[GroupElement<C>],
    a: &[C::Scalar],
    h_vec: &[GroupElement<C>],
    b: &[C::Scalar],
) -> BulletproofsResult<GroupElement<C>> {
    let bases: Vec<GroupElement<C>> = std::iter::once(h).chain(g_vec).chain(h_vec).copied().collect();
    let exps: Vec<C::Scalar> = std::iter::once(blinding).chain(a).chain(b).copied().collect();
    vector_exp(&bases, &exps)
}

/// Prove `0 <= secret < 2^n` for a caller-supplied commitment `v = Commit(secret, gamma)`
pub fn prove_range<C: Curve, R: RngCore + CryptoRng>(
    params: &BulletproofSetupParams<C>,
    secret: i64,
    gamma: &C::Scalar,
    v: &GroupElement<C>,
    rng: &mut R,
) -> BulletproofsResult<RangeProof<C>> {
    if !params.pedersen_gens().open(v, scalar_from_i64(secret), *gamma) {
        return Err(BulletproofsError::InvalidParameters(
            "commitment does not open to the secret".to_string(),
        ));
    }
    RangeProver::new(params.clone()).prove(secret, gamma, rng)
}
