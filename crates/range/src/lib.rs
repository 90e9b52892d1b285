//! # Bulletproofs Range Proofs
//!
//! This crate implements range proofs using the inner product argument.
//! Range proofs allow proving that a committed value lies within a specified range
//! without revealing the actual value.
//!
//! ## Mathematical Background
//!
//! A range proof for value `v` in range `[0, 2^n)` committed as `V = g^v * h^gamma` works by:
//!
//! 1. **Bit Decomposition**: Express `v = Σ(a_i * 2^i)` and commit to the bits `aL` and
//!    `aR = aL - 1` in `A`, plus random masks in `S`.
//! 2. **Challenges**: `y, z`, hashed from `n`, `m`, every `V_j`, `A` and `S`, collapse the constraints `aL ∘ aR = 0`, `aL - aR = 1` and
//!    `<aL, 2^n> = v` into one polynomial `t(X) = <l(X), r(X)>`.
//! 3. **Polynomial Commitment**: commit to `t1`, `t2` in `T1`, `T2` and open at `x`, which
//!    continues the same transcript with `T1, T2`.
//! 4. **Inner Product Argument**: prove `<l, r> = t(x)` in `log2(n)` rounds over the generators
//!    `Gg` and `h'_i = Hh_i^{y^{-i}}`.
//!
//! Aggregated proofs cover `m` values with bit vectors of length `n * m` and a single inner product
//! argument of `log2(n * m)` rounds.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use bulletproofs_core::{curves::Secp256k1, Field};
//! use range::{BulletproofSetupParams, RangeProver};
//! use rand::rngs::OsRng;
//!
//! // Prove that value 42 is in range [0, 2^32)
//! let params = BulletproofSetupParams::<Secp256k1>::setup(32).unwrap();
//! let gamma = k256::Scalar::random(OsRng);
//!
//! let proof = RangeProver::new(params.clone()).prove(42, &gamma, &mut OsRng).unwrap();
//! assert!(proof.verify(&params).unwrap());
//! ```

pub mod batch;
pub mod config;
pub mod proof;
pub mod prover;
pub mod setup;
pub mod verifier;

#[cfg(test)]
mod property_tests;

pub use batch::{prove_batch, verify_batch};
pub use config::{RangeProofConfig, MAX_AGGREGATION, MAX_RANGE_BITS};
pub use proof::RangeProof;
pub use prover::{prove_range, RangeProver};
pub use setup::{update_generators, BulletproofSetupParams};
pub use verifier::RangeVerifier;
