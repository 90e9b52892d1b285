//! Ristretto255 backed by `curve25519-dalek`

use crate::{Curve, Endianness};
use curve25519_dalek::{ristretto::RistrettoPoint, scalar::Scalar};
use group::GroupEncoding;

/// The Ristretto255 prime-order group
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ristretto;

impl Curve for Ristretto {
    type Scalar = Scalar;
    type Point = RistrettoPoint;

    const NAME: &'static str = "ristretto255";
    const SCALAR_ENDIANNESS: Endianness = Endianness::Little;

    fn map_candidate(candidate: &[u8; 64]) -> Option<RistrettoPoint> {
        let mut repr = [0u8; 32];
        repr.copy_from_slice(&candidate[..32]);
        <RistrettoPoint as GroupEncoding>::from_bytes(&repr).into()
    }

    cached_params!(Ristretto);
}
