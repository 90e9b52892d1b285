//! ElGamal key pairs

use bulletproofs_core::{scalar::random_nonzero_scalar, Curve, Field, GroupElement};
use rand_core::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Secret decryption key, never zero
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct SecretKey<C: Curve>(C::Scalar);

impl<C: Curve> SecretKey<C> {
    /// Wrap a scalar, refusing zero
    pub fn from_scalar(scalar: C::Scalar) -> Option<Self> {
        if bool::from(scalar.is_zero()) {
            None
        } else {
            Some(Self(scalar))
        }
    }

    pub fn as_scalar(&self) -> &C::Scalar {
        &self.0
    }

    /// `pk = g^sk`
    pub fn public_key(&self) -> PublicKey<C> {
        PublicKey(GroupElement::mul_base(&self.0))
    }
}

impl<C: Curve> fmt::Debug for SecretKey<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(..)")
    }
}

/// Public encryption key `pk = g^sk`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct PublicKey<C: Curve>(pub GroupElement<C>);

impl<C: Curve> PublicKey<C> {
    pub fn as_point(&self) -> &GroupElement<C> {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keypair<C: Curve> {
    pub secret: SecretKey<C>,
    pub public: PublicKey<C>,
}

/// Sample a fresh key pair
pub fn gen_key_pair<C: Curve, R: RngCore + CryptoRng>(rng: &mut R) -> Keypair<C> {
    let secret = SecretKey(random_nonzero_scalar::<C::Scalar, _>(rng));
    Keypair {
        public: secret.public_key(),
        secret,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bulletproofs_core::curves::Secp256k1;
    use rand::rngs::OsRng;

    #[test]
    fn test_public_key_matches_secret() {
        let keys = gen_key_pair::<Secp256k1, _>(&mut OsRng);
        assert_eq!(
            keys.public.0,
            GroupElement::generator() * *keys.secret.as_scalar()
        );
        assert!(!keys.public.0.is_identity());
    }

    #[test]
    fn test_zero_secret_rejected() {
        assert!(SecretKey::<Secp256k1>::from_scalar(k256::Scalar::ZERO).is_none());
        assert!(SecretKey::<Secp256k1>::from_scalar(k256::Scalar::ONE).is_some());
    }

    #[test]
    fn test_debug_hides_secret() {
        let keys = gen_key_pair::<Secp256k1, _>(&mut OsRng);
        assert_eq!(format!("{:?}", keys.secret), "SecretKey(..)");
    }
}
