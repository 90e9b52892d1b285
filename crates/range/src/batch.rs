//! Independent range proofs proven and verified as one unit of work
//!
//! Every proof draws its own randomness and shares nothing but the read-only parameters, so
//! the work fans out over the rayon pool when the parameters allow it. Results are all or
//! nothing: one failing proof fails the whole batch.

use crate::{BulletproofSetupParams, RangeProof, RangeProver, RangeVerifier};
use bulletproofs_core::{BulletproofsResult, Curve};
use rand::rngs::OsRng;
use rayon::prelude::*;

/// Prove every `(secret, gamma)` pair with its own single-value proof
#[tracing::instrument(name = "range::prove_batch", level = "debug", skip_all, fields(count = witnesses.len()))]
pub fn prove_batch<C: Curve>(
    params: &BulletproofSetupParams<C>,
    witnesses: &[(i64, C::Scalar)],
) -> BulletproofsResult<Vec<RangeProof<C>>> {
    let prover = RangeProver::new(params.clone());
    let prove_one = |(secret, gamma): &(i64, C::Scalar)| prover.prove(*secret, gamma, &mut OsRng);

    if params.parallel {
        witnesses.par_iter().map(prove_one).collect()
    } else {
        witnesses.iter().map(prove_one).collect()
    }
}

/// `Ok(true)` only when every proof verifies
#[tracing::instrument(name = "range::verify_batch", level = "debug", skip_all, fields(count = proofs.len()))]
pub fn verify_batch<C: Curve>(
    params: &BulletproofSetupParams<C>,
    proofs: &[RangeProof<C>],
) -> BulletproofsResult<bool> {
    let verifier = RangeVerifier::new(params.clone());

    let results: Vec<bool> = if params.parallel {
        proofs
            .par_iter()
            .map(|proof| verifier.verify(proof))
            .collect::<BulletproofsResult<_>>()?
    } else {
        proofs
            .iter()
            .map(|proof| verifier.verify(proof))
            .collect::<BulletproofsResult<_>>()?
    };

    let valid = results.iter().all(|ok| *ok);
    if !valid {
        tracing::debug!(
            failed = results.iter().filter(|ok| !**ok).count(),
            "batch contains invalid proofs"
        );
    }
    Ok(valid)
}
