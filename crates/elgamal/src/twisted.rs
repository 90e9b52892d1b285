//! Twisted ElGamal
//!
//! `Enc(b, r, pk) = (CL, CR) = (pk^r, g^r * h^b)` where `g` is the base point and `h` the NUMS
//! blinding generator of the curve. `CR` is a Pedersen commitment to `b` with blinding `r` over
//! the pair `(h, g)`, which is what lets a range proof speak about the encrypted amount.

use crate::{
    codec::{decode_pair, encode_pair, from_base64, to_base64},
    dlog::bounded_discrete_log,
    PublicKey, SecretKey,
};
use bulletproofs_core::{
    scalar::{invert, random_scalar, scalar_from_i64},
    BulletproofsError, BulletproofsResult, Curve, GroupElement,
};
use rand_core::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use std::{fmt, ops, str::FromStr};

/// A twisted ElGamal ciphertext
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct ElGamalEnc<C: Curve> {
    pub cl: GroupElement<C>,
    pub cr: GroupElement<C>,
}

impl<C: Curve> ElGamalEnc<C> {
    /// Encrypt `value` under `pk` with explicit randomness `r`
    pub fn encrypt(value: i64, r: &C::Scalar, pk: &PublicKey<C>) -> BulletproofsResult<Self> {
        let params = C::params()?;
        Ok(Self {
            cl: pk.0 * *r,
            cr: params.g * *r + params.h * scalar_from_i64::<C::Scalar>(value),
        })
    }

    /// Encrypt with fresh randomness, returning it alongside the ciphertext
    pub fn encrypt_random<R: RngCore + CryptoRng>(
        rng: &mut R,
        value: i64,
        pk: &PublicKey<C>,
    ) -> BulletproofsResult<(Self, C::Scalar)> {
        let r = random_scalar::<C::Scalar, _>(rng);
        Ok((Self::encrypt(value, &r, pk)?, r))
    }

    /// Decrypt, searching the plaintext in `[0, max_value)`
    ///
    /// `Ok(None)` means no plaintext in range matched.
    pub fn decrypt(&self, sk: &SecretKey<C>, max_value: u64) -> BulletproofsResult<Option<u64>> {
        self.decrypt_from(sk, 0, max_value)
    }

    /// Decrypt, searching the plaintext in `[start, max_value)`
    #[tracing::instrument(name = "ElGamalEnc::decrypt_from", level = "debug", skip_all)]
    pub fn decrypt_from(
        &self,
        sk: &SecretKey<C>,
        start: u64,
        max_value: u64,
    ) -> BulletproofsResult<Option<u64>> {
        let params = C::params()?;
        let sk_inv = invert(sk.as_scalar())?;
        let h_b = self.cr - self.cl * sk_inv;

        let value = bounded_discrete_log(&h_b, &params.h, start, max_value);
        if value.is_none() {
            tracing::debug!(start, max_value, "plaintext not found in search range");
        }
        Ok(value)
    }

    /// Multiply the encrypted value by a public constant
    pub fn scale(&self, k: &C::Scalar) -> Self {
        Self {
            cl: self.cl * *k,
            cr: self.cr * *k,
        }
    }

    /// Overwrite both halves with those of `other`
    pub fn set(&mut self, other: &Self) {
        self.cl = other.cl;
        self.cr = other.cr;
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        encode_pair(&self.cl, &self.cr)
    }

    pub fn from_bytes(bytes: &[u8]) -> BulletproofsResult<Self> {
        let (cl, cr) = decode_pair(bytes)?;
        Ok(Self { cl, cr })
    }
}

impl<C: Curve> ops::Add for ElGamalEnc<C> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            cl: self.cl + other.cl,
            cr: self.cr + other.cr,
        }
    }
}

impl<C: Curve> ops::Sub for ElGamalEnc<C> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            cl: self.cl - other.cl,
            cr: self.cr - other.cr,
        }
    }
}

impl<C: Curve> ops::Neg for ElGamalEnc<C> {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            cl: -self.cl,
            cr: -self.cr,
        }
    }
}

impl<C: Curve> fmt::Display for ElGamalEnc<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_base64(&self.to_bytes()))
    }
}

impl<C: Curve> FromStr for ElGamalEnc<C> {
    type Err = BulletproofsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_bytes(&from_base64(s)?)
    }
}
