//! Jubjub twisted Edwards curve backed by `jubjub`

use crate::{Curve, Endianness};
use group::{cofactor::CofactorGroup, GroupEncoding};
use jubjub::{ExtendedPoint, Fr, SubgroupPoint};

/// The prime-order subgroup of the Jubjub twisted Edwards curve
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Jubjub;

impl Curve for Jubjub {
    type Scalar = Fr;
    type Point = SubgroupPoint;

    const NAME: &'static str = "jubjub";
    const SCALAR_ENDIANNESS: Endianness = Endianness::Little;

    fn map_candidate(candidate: &[u8; 64]) -> Option<SubgroupPoint> {
        let mut repr = [0u8; 32];
        repr.copy_from_slice(&candidate[..32]);
        Option::<ExtendedPoint>::from(<ExtendedPoint as GroupEncoding>::from_bytes(&repr))
            .map(|point| point.clear_cofactor())
    }

    cached_params!(Jubjub);
}
