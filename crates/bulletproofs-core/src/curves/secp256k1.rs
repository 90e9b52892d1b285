//! secp256k1 backed by `k256`

use crate::{Curve, Endianness};
use group::GroupEncoding;
use k256::{ProjectivePoint, Scalar};

/// The secp256k1 curve
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Secp256k1;

impl Curve for Secp256k1 {
    type Scalar = Scalar;
    type Point = ProjectivePoint;

    const NAME: &'static str = "secp256k1";
    const SCALAR_ENDIANNESS: Endianness = Endianness::Big;

    fn map_candidate(candidate: &[u8; 64]) -> Option<ProjectivePoint> {
        // SEC1 compressed form, even y
        let mut repr = <ProjectivePoint as GroupEncoding>::Repr::default();
        repr[0] = 0x02;
        repr[1..].copy_from_slice(&candidate[..32]);
        <ProjectivePoint as GroupEncoding>::from_bytes(&repr).into()
    }

    cached_params!(Secp256k1);
}
