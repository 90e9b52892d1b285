//! BN254 G1 backed by `halo2curves`

use crate::{Curve, Endianness};
use group::GroupEncoding;
use halo2curves::bn256::{Fr, G1};

/// The BN254 (alt_bn128) curve, group G1
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bn254;

impl Curve for Bn254 {
    type Scalar = Fr;
    type Point = G1;

    const NAME: &'static str = "bn254";
    const SCALAR_ENDIANNESS: Endianness = Endianness::Little;

    fn map_candidate(candidate: &[u8; 64]) -> Option<G1> {
        let mut repr = <G1 as GroupEncoding>::Repr::default();
        repr.as_mut().copy_from_slice(&candidate[..32]);
        // the two spare top bits carry the encoding flags
        repr.as_mut()[31] &= 0b0011_1111;
        <G1 as GroupEncoding>::from_bytes(&repr).into()
    }

    cached_params!(Bn254);
}
