//! Property-based tests for range proof soundness and completeness

use crate::{BulletproofSetupParams, RangeProof, RangeProver};
use bulletproofs_core::{curves::Secp256k1, BulletproofsError, Field};
use k256::Scalar;
use proptest::prelude::*;
use rand::rngs::OsRng;

fn params(bits: usize, m: usize) -> BulletproofSetupParams<Secp256k1> {
    BulletproofSetupParams::setup_aggregate(bits, m).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(12))]

    /// Valid range proofs always verify
    #[test]
    fn test_completeness(value in 0i64..(1 << 32)) {
        let params = params(32, 1);
        let proof = RangeProver::new(params.clone()).prove(value, &Scalar::random(OsRng), &mut OsRng)?;
        prop_assert!(proof.verify(&params)?);
    }

    /// Aggregated proofs verify for any in-range values
    #[test]
    fn test_aggregate_completeness(values in proptest::collection::vec(0i64..256, 4)) {
        let params = params(8, 4);
        let gammas: Vec<Scalar> = values.iter().map(|_| Scalar::random(OsRng)).collect();
        let proof = RangeProver::new(params.clone()).prove_aggregate(&values, &gammas, &mut OsRng)?;
        prop_assert!(proof.verify(&params)?);
    }

    /// Out-of-range values cannot be proven
    #[test]
    fn test_soundness_out_of_range(bits_log in 0u32..5, excess in 0i64..1000) {
        let bits = 1usize << bits_log;
        let params = params(bits, 1);
        let prover = RangeProver::new(params);
        let too_big = (1i64 << bits) + excess;

        prop_assert_eq!(
            prover.prove(too_big, &Scalar::ONE, &mut OsRng),
            Err(BulletproofsError::RangeConstraintViolation { value: too_big, bits })
        );
        prop_assert!(prover.prove(-1 - excess, &Scalar::ONE, &mut OsRng).is_err());
    }

    /// A proof does not verify against a different commitment
    #[test]
    fn test_binding_to_commitment(value in 0i64..1000, other in 0i64..1000) {
        prop_assume!(value != other);
        let params = params(16, 1);
        let gamma = Scalar::random(OsRng);
        let mut proof = RangeProver::new(params.clone()).prove(value, &gamma, &mut OsRng)?;
        proof.commitments[0] = params.pedersen_gens().commit(Scalar::from(other as u64), gamma);
        prop_assert!(!proof.verify(&params)?);
    }

    /// Encoded proofs decode to proofs that still verify
    #[test]
    fn test_encoding_preserves_validity(value in 0i64..(1 << 16)) {
        let params = params(16, 1);
        let proof = RangeProver::new(params.clone()).prove(value, &Scalar::random(OsRng), &mut OsRng)?;
        let decoded = RangeProof::<Secp256k1>::from_bytes(&proof.to_bytes())?;
        prop_assert!(decoded.verify(&params)?);
    }
}
