//! # Bulletproofs Core
//!
//! This crate provides the foundational types, traits, and utilities for
//! implementing Bulletproofs zero-knowledge proofs. It includes:
//!
//! - A [`Curve`] abstraction with backends for secp256k1, BN254, BLS12-381,
//!   Ristretto255 and Jubjub
//! - Basic cryptographic primitives and group operations
//! - Fiat-Shamir transcript hashing
//! - Pedersen commitments, vector commitments and generator management
//! - Error types and utilities
//!
//! ## Mathematical Background
//!
//! Bulletproofs operate over an elliptic curve group of prime order with generators:
//! - `G`: primary generator for commitments
//! - `H`: secondary generator for blinding
//! - `{g_i}`: vector of generators for left commitments
//! - `{h_i}`: vector of generators for right commitments
//! - `u`: generator for inner product
//!
//! The core mathematical relationship is proving knowledge of vectors `a, b` such that:
//! ```text
//! P = g^a * h^b * u^<a,b>
//! ```
//! where `<a,b>` denotes the inner product of vectors `a` and `b`.

pub mod curve;
pub mod curves;
pub mod errors;
pub mod generators;
pub mod group;
pub mod msm;
pub mod pedersen;
pub mod scalar;
pub mod transcript;
pub mod utils;

pub use crate::group::*;
pub use curve::*;
pub use errors::*;
pub use generators::*;
pub use msm::vector_exp;
pub use pedersen::*;
pub use transcript::*;
pub use utils::*;

/// Re-export the field and group traits every generic caller needs
pub use ff::{Field, PrimeField};
