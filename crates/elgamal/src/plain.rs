//! Plain (exponential) ElGamal: `Enc(b, r, pk) = (g^r, g^b * pk^r)`

use crate::{
    codec::{decode_pair, encode_pair, from_base64, to_base64},
    dlog::bounded_discrete_log,
    PublicKey, SecretKey,
};
use bulletproofs_core::{
    scalar::{random_scalar, scalar_from_i64},
    BulletproofsError, BulletproofsResult, Curve, GroupElement,
};
use rand_core::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use std::{fmt, ops, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct PlainElGamalEnc<C: Curve> {
    pub cl: GroupElement<C>,
    pub cr: GroupElement<C>,
}

impl<C: Curve> PlainElGamalEnc<C> {
    pub fn encrypt(value: i64, r: &C::Scalar, pk: &PublicKey<C>) -> Self {
        Self {
            cl: GroupElement::mul_base(r),
            cr: GroupElement::mul_base(&scalar_from_i64(value)) + pk.0 * *r,
        }
    }

    pub fn encrypt_random<R: RngCore + CryptoRng>(
        rng: &mut R,
        value: i64,
        pk: &PublicKey<C>,
    ) -> (Self, C::Scalar) {
        let r = random_scalar::<C::Scalar, _>(rng);
        (Self::encrypt(value, &r, pk), r)
    }

    /// Decrypt, searching the plaintext in `[0, max_value)`
    pub fn decrypt(&self, sk: &SecretKey<C>, max_value: u64) -> Option<u64> {
        self.decrypt_from(sk, 0, max_value)
    }

    pub fn decrypt_from(&self, sk: &SecretKey<C>, start: u64, max_value: u64) -> Option<u64> {
        let g_b = self.cr - self.cl * *sk.as_scalar();
        bounded_discrete_log(&g_b, &GroupElement::generator(), start, max_value)
    }

    pub fn set(&mut self, other: &Self) {
        *self = *other;
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        encode_pair(&self.cl, &self.cr)
    }

    pub fn from_bytes(bytes: &[u8]) -> BulletproofsResult<Self> {
        let (cl, cr) = decode_pair(bytes)?;
        Ok(Self { cl, cr })
    }
}

impl<C: Curve> ops::Add for PlainElGamalEnc<C> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            cl: self.cl + other.cl,
            cr: self.cr + other.cr,
        }
    }
}

impl<C: Curve> ops::Sub for PlainElGamalEnc<C> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            cl: self.cl - other.cl,
            cr: self.cr - other.cr,
        }
    }
}

impl<C: Curve> ops::Neg for PlainElGamalEnc<C> {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            cl: -self.cl,
            cr: -self.cr,
        }
    }
}

impl<C: Curve> fmt::Display for PlainElGamalEnc<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_base64(&self.to_bytes()))
    }
}

impl<C: Curve> FromStr for PlainElGamalEnc<C> {
    type Err = BulletproofsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_bytes(&from_base64(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gen_key_pair;
    use bulletproofs_core::curves::{Bls12381, Jubjub};
    use rand::rngs::OsRng;

    #[test]
    fn test_encrypt_decrypt_and_add() {
        let keys = gen_key_pair::<Bls12381, _>(&mut OsRng);
        let (c1, _) = PlainElGamalEnc::encrypt_random(&mut OsRng, 3, &keys.public);
        let (c2, _) = PlainElGamalEnc::encrypt_random(&mut OsRng, 5, &keys.public);
        assert_eq!(c1.decrypt(&keys.secret, 10), Some(3));
        assert_eq!((c1 + c2).decrypt(&keys.secret, 10), Some(8));
        assert_eq!((c2 - c1).decrypt_from(&keys.secret, 1, 10), Some(2));
        assert_eq!((c1 + c2).decrypt(&keys.secret, 8), None);
    }

    #[test]
    fn test_negation() {
        let keys = gen_key_pair::<Bls12381, _>(&mut OsRng);
        let (c1, _) = PlainElGamalEnc::encrypt_random(&mut OsRng, 3, &keys.public);
        let (c2, _) = PlainElGamalEnc::encrypt_random(&mut OsRng, 5, &keys.public);

        assert_eq!(c1 - c2, c1 + -c2);
        assert_eq!((c2 + -c1).decrypt(&keys.secret, 10), Some(2));
        assert_eq!(-(-c1), c1);
        // -3 lands far from the search window
        assert_eq!((-c1).decrypt(&keys.secret, 10), None);
        assert_eq!((-c1 + c2).decrypt(&keys.secret, 10), Some(2));
    }

    #[test]
    fn test_differs_from_twisted() {
        let keys = gen_key_pair::<Jubjub, _>(&mut OsRng);
        let r = <Jubjub as Curve>::Scalar::from(77u64);
        let plain = PlainElGamalEnc::encrypt(4, &r, &keys.public);
        let twisted = crate::ElGamalEnc::encrypt(4, &r, &keys.public).unwrap();
        assert_ne!(plain.to_bytes(), twisted.to_bytes());
        assert_eq!(plain.decrypt(&keys.secret, 10), Some(4));
        assert_eq!(twisted.decrypt(&keys.secret, 10).unwrap(), Some(4));
    }

    #[test]
    fn test_text_round_trip() {
        let keys = gen_key_pair::<Jubjub, _>(&mut OsRng);
        let (enc, _) = PlainElGamalEnc::<Jubjub>::encrypt_random(&mut OsRng, 1, &keys.public);
        let mut copy: PlainElGamalEnc<Jubjub> = enc.to_string().parse().unwrap();
        assert_eq!(copy, enc);
        copy.set(&(enc + enc));
        assert_eq!(copy.decrypt(&keys.secret, 5), Some(2));
    }
}
