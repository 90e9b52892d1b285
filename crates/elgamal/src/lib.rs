//! # ElGamal encryption
//!
//! Additively homomorphic ElGamal over any [`Curve`](bulletproofs_core::Curve), in two flavours:
//!
//! - **Twisted ElGamal** ([`ElGamalEnc`]): `Enc(b, r, pk) = (pk^r, g^r * h^b)`. The message sits
//!   in the exponent of the NUMS generator `h`, so `CR` is a Pedersen commitment to `b` and a
//!   range proof over `CR` certifies the encrypted value directly.
//! - **Plain ElGamal** ([`PlainElGamalEnc`]): `Enc(b, r, pk) = (g^r, g^b * pk^r)`.
//!
//! Decryption recovers a group element `base^b` and then searches `b` in a caller-supplied range.
//! The search is linear in the bound; balances are bounded and separately range-proven, so no
//! discrete-log oracle is needed.

mod codec;
pub mod dlog;
pub mod keys;
pub mod plain;
pub mod twisted;

pub use dlog::bounded_discrete_log;
pub use keys::*;
pub use plain::PlainElGamalEnc;
pub use twisted::ElGamalEnc;
