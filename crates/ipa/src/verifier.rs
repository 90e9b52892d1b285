//! Inner Product Argument verifier implementation

use crate::{InnerProductParams, InnerProductProof};
use bulletproofs_core::{
    hash_round, vector_exp, BulletproofsError, BulletproofsResult, Curve, Field, GroupElement,
};

/// Inner Product Argument verifier
#[derive(Debug, Clone)]
pub struct InnerProductVerifier<C: Curve> {
    params: InnerProductParams<C>,
}

impl<C: Curve> InnerProductVerifier<C> {
    /// Create a new IPA verifier for the given statement
    pub fn new(params: InnerProductParams<C>) -> Self {
        Self { params }
    }

    /// Verify an inner product proof
    ///
    /// Returns `Ok(false)` when a cryptographic check fails and an error when the proof does not
    /// have the shape the statement requires.
    #[tracing::instrument(name = "InnerProductVerifier::verify", level = "debug", skip_all, fields(n = self.params.n))]
    pub fn verify(&self, proof: &InnerProductProof<C>) -> BulletproofsResult<bool> {
        let params = &self.params;
        params.validate()?;
        proof.validate_structure()?;

        if proof.n != params.n {
            return Err(BulletproofsError::InvalidProof(format!(
                "proof is for length {}, statement has length {}",
                proof.n, params.n
            )));
        }

        let (ux, p_prime) = params.bind();

        let mut challenges = Vec::with_capacity(proof.num_rounds());
        let mut challenges_inv = Vec::with_capacity(proof.num_rounds());
        for (l, r) in proof.l_vec.iter().zip(proof.r_vec.iter()) {
            let x = hash_round(l, r);
            let x_inv: Option<C::Scalar> = x.invert().into();
            match x_inv {
                Some(x_inv) => {
                    challenges.push(x);
                    challenges_inv.push(x_inv);
                }
                None => {
                    tracing::debug!(round = challenges.len(), "zero round challenge");
                    return Ok(false);
                }
            }
        }

        let (s_g, s_h) = compute_s_scalars(&challenges, &challenges_inv, params.n);
        tracing::trace!(rounds = challenges.len(), "replayed challenges");

        // P' + sum(x_i^2 * L_i + x_i^{-2} * R_i)
        let mut bases: Vec<GroupElement<C>> = Vec::with_capacity(2 * challenges.len() + 1);
        let mut exps: Vec<C::Scalar> = Vec::with_capacity(2 * challenges.len() + 1);
        bases.push(p_prime);
        exps.push(C::Scalar::ONE);
        for i in 0..challenges.len() {
            bases.push(proof.l_vec[i]);
            exps.push(challenges[i].square());
            bases.push(proof.r_vec[i]);
            exps.push(challenges_inv[i].square());
        }
        let left_side = vector_exp(&bases, &exps)?;

        // g'^a * h'^b * ux^{ab}, with g' = sum(s_g[i] * g[i]) and h' = sum(s_h[i] * h[i])
        let bases: Vec<GroupElement<C>> = params
            .g_vec
            .iter()
            .chain(params.h_vec.iter())
            .chain(std::iter::once(&ux))
            .copied()
            .collect();
        let exps: Vec<C::Scalar> = s_g
            .iter()
            .map(|s| *s * proof.a)
            .chain(s_h.iter().map(|s| *s * proof.b))
            .chain(std::iter::once(proof.a * proof.b))
            .collect();
        let right_side = vector_exp(&bases, &exps)?;

        if left_side != right_side {
            tracing::debug!("final inner product equation does not hold");
            return Ok(false);
        }

        Ok(true)
    }
}

/// Coefficients of the fully folded generators in terms of the original ones
///
/// Round `j` splits on bit `k - 1 - j` of the index: the upper half of `g` is scaled by `x_j` and
/// the lower half by `x_j^{-1}`, and the reverse for `h`.
fn compute_s_scalars<F: Field>(challenges: &[F], challenges_inv: &[F], n: usize) -> (Vec<F>, Vec<F>) {
    let mut s_g = vec![F::ONE; n];
    let mut s_h = vec![F::ONE; n];
    let rounds = challenges.len();

    for (round, (x, x_inv)) in challenges.iter().zip(challenges_inv.iter()).enumerate() {
        let bit_position = rounds - 1 - round;

        for i in 0..n {
            if (i >> bit_position) & 1 == 1 {
                s_g[i] *= x;
                s_h[i] *= x_inv;
            } else {
                s_g[i] *= x_inv;
                s_h[i] *= x;
            }
        }
    }

    (s_g, s_h)
}

/// Verify `proof` against `params`
pub fn verify_inner_product<C: Curve>(
    params: &InnerProductParams<C>,
    proof: &InnerProductProof<C>,
) -> BulletproofsResult<bool> {
    InnerProductVerifier::new(params.clone()).verify(proof)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prove_inner_product;
    use bulletproofs_core::{
        curves::{Bls12381, Bn254, Jubjub, Ristretto, Secp256k1},
        inner_product, GeneratorSet,
    };
    use k256::Scalar;
    use proptest::prelude::*;
    use rand::rngs::OsRng;

    fn statement<C: Curve>(a: &[C::Scalar], b: &[C::Scalar]) -> InnerProductParams<C> {
        let generators = GeneratorSet::<C>::new(a.len()).unwrap();
        let p = generators.vector_commit(a, b).unwrap();
        InnerProductParams::setup(a.len(), p, inner_product(a, b).unwrap()).unwrap()
    }

    fn round_trip<C: Curve>(vector_length: usize) -> bool {
        let a: Vec<C::Scalar> = (0..vector_length).map(|_| C::Scalar::random(OsRng)).collect();
        let b: Vec<C::Scalar> = (0..vector_length).map(|_| C::Scalar::random(OsRng)).collect();

        let params = statement::<C>(&a, &b);
        let proof = prove_inner_product(&params, &a, &b).unwrap();
        assert_eq!(proof.num_rounds(), vector_length.trailing_zeros() as usize);
        verify_inner_product(&params, &proof).unwrap()
    }

    #[test]
    fn test_ipa_verification_powers_of_two() {
        for k in 0..=6 {
            assert!(round_trip::<Secp256k1>(1 << k), "verification failed for length {}", 1 << k);
        }
    }

    #[test]
    fn test_ipa_verification_other_curves() {
        assert!(round_trip::<Bn254>(8));
        assert!(round_trip::<Bls12381>(4));
        assert!(round_trip::<Ristretto>(16));
        assert!(round_trip::<Jubjub>(2));
    }

    #[test]
    fn test_s_scalars_match_folding() {
        let x = [Scalar::from(3u64), Scalar::from(5u64)];
        let x_inv = [x[0].invert().unwrap(), x[1].invert().unwrap()];
        let (s_g, s_h) = compute_s_scalars(&x, &x_inv, 4);

        assert_eq!(s_g[0], x_inv[0] * x_inv[1]);
        assert_eq!(s_g[1], x_inv[0] * x[1]);
        assert_eq!(s_g[2], x[0] * x_inv[1]);
        assert_eq!(s_g[3], x[0] * x[1]);
        for i in 0..4 {
            assert_eq!(s_g[i] * s_h[i], Scalar::ONE);
        }
    }

    #[test]
    fn test_tampered_round_points_rejected() {
        let a: Vec<Scalar> = (1..=8u64).map(Scalar::from).collect();
        let b: Vec<Scalar> = (11..=18u64).map(Scalar::from).collect();
        let params = statement::<Secp256k1>(&a, &b);
        let proof = prove_inner_product(&params, &a, &b).unwrap();
        let bytes = proof.to_bytes();

        let points = 2 * proof.num_rounds();
        for i in 0..points {
            // flip a byte in the x coordinate of the i-th L/R point
            let mut tampered = bytes.clone();
            tampered[4 + i * Secp256k1::point_size() + 10] ^= 0x01;
            match InnerProductProof::<Secp256k1>::from_bytes(&tampered) {
                Ok(proof) => assert!(!verify_inner_product(&params, &proof).unwrap()),
                Err(e) => assert!(matches!(e, BulletproofsError::InvalidProof(_))),
            }
        }
    }

    #[test]
    fn test_tampered_scalars_rejected() {
        let a: Vec<Scalar> = (1..=4u64).map(Scalar::from).collect();
        let b: Vec<Scalar> = (5..=8u64).map(Scalar::from).collect();
        let params = statement::<Secp256k1>(&a, &b);

        let mut proof = prove_inner_product(&params, &a, &b).unwrap();
        proof.a += Scalar::ONE;
        assert!(!verify_inner_product(&params, &proof).unwrap());

        let mut proof = prove_inner_product(&params, &a, &b).unwrap();
        std::mem::swap(&mut proof.l_vec, &mut proof.r_vec);
        assert!(!verify_inner_product(&params, &proof).unwrap());
    }

    #[test]
    fn test_wrong_statement_rejected() {
        let a: Vec<Scalar> = (1..=4u64).map(Scalar::from).collect();
        let b: Vec<Scalar> = (5..=8u64).map(Scalar::from).collect();
        let params = statement::<Secp256k1>(&a, &b);
        let proof = prove_inner_product(&params, &a, &b).unwrap();

        let mut other = params.clone();
        other.c += Scalar::ONE;
        assert!(!verify_inner_product(&other, &proof).unwrap());

        let mut other = params.clone();
        other.p = other.p + GroupElement::generator();
        assert!(!verify_inner_product(&other, &proof).unwrap());
    }

    #[test]
    fn test_invalid_proof_wrong_rounds() {
        let a = vec![Scalar::from(1u64); 8];
        let b = vec![Scalar::from(2u64); 8];
        let params = statement::<Secp256k1>(&a, &b);

        let mut proof = prove_inner_product(&params, &a, &b).unwrap();
        proof.l_vec.pop();
        proof.r_vec.pop();
        assert!(matches!(
            verify_inner_product(&params, &proof),
            Err(BulletproofsError::InvalidProof(_))
        ));

        let short_a = vec![Scalar::from(1u64); 4];
        let short_params = statement::<Secp256k1>(&short_a, &short_a);
        let short_proof = prove_inner_product(&short_params, &short_a, &short_a).unwrap();
        assert!(matches!(
            verify_inner_product(&params, &short_proof),
            Err(BulletproofsError::InvalidProof(_))
        ));
    }

    #[test]
    fn test_forge_proof_detection() {
        let a = vec![Scalar::from(1u64), Scalar::from(2u64), Scalar::from(3u64), Scalar::from(4u64)];
        let b = vec![Scalar::from(5u64), Scalar::from(6u64), Scalar::from(7u64), Scalar::from(8u64)];
        let params = statement::<Secp256k1>(&a, &b);

        let g = GroupElement::<Secp256k1>::generator();
        let forged_proof = InnerProductProof {
            n: 4,
            l_vec: vec![g; 2],
            r_vec: vec![g; 2],
            a: Scalar::from(99u64),
            b: Scalar::from(99u64),
        };

        assert!(!verify_inner_product(&params, &forged_proof).unwrap(), "Forged proof should not verify");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(8))]

        #[test]
        fn test_completeness(xs in proptest::collection::vec(any::<u64>(), 16)) {
            let a: Vec<Scalar> = xs[..8].iter().map(|x| Scalar::from(*x)).collect();
            let b: Vec<Scalar> = xs[8..].iter().map(|x| Scalar::from(*x)).collect();
            let params = statement::<Secp256k1>(&a, &b);
            let proof = prove_inner_product(&params, &a, &b).unwrap();
            prop_assert!(verify_inner_product(&params, &proof).unwrap());
        }
    }
}
