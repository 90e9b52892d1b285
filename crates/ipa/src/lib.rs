//! # Inner Product Argument (IPA)
//!
//! This crate implements the inner product argument, which is the core component
//! of Bulletproofs. The IPA allows proving knowledge of vectors `a` and `b` of length `n`
//! such that:
//!
//! ```text
//! P = g^a * h^b    and    <a, b> = c
//! ```
//!
//! ## Mathematical Background
//!
//! The statement is first bound to the transcript: `x = H(g || h || P || c)`, `ux = u^x` and
//! `P' = P * ux^c`, so the claim becomes `P' = g^a * h^b * ux^<a,b>`. The proof then runs
//! `log2(n)` folding rounds:
//!
//! - Split vectors: `a = (a_L, a_R)`, `b = (b_L, b_R)`
//! - Compute cross terms:
//!   - `L = g_R^{a_L} * h_L^{b_R} * ux^{<a_L, b_R>}`
//!   - `R = g_L^{a_R} * h_R^{b_L} * ux^{<a_R, b_L>}`
//! - Get challenge `x = H(L || R)`
//! - Fold vectors:
//!   - `a' = a_L * x + a_R * x^{-1}`
//!   - `b' = b_L * x^{-1} + b_R * x`
//! - Fold generators:
//!   - `g' = g_L^{x^{-1}} * g_R^x`
//!   - `h' = h_L^x * h_R^{x^{-1}}`
//!
//! The proof consists of all the L and R values from each folding round plus the two
//! remaining scalars. `n` must be a power of two; other lengths are rejected.

pub mod params;
pub mod proof;
pub mod prover;
pub mod verifier;

pub use params::InnerProductParams;
pub use proof::InnerProductProof;
pub use prover::{prove_inner_product, InnerProductProver};
pub use verifier::{verify_inner_product, InnerProductVerifier};
