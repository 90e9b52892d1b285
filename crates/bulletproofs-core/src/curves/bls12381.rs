//! BLS12-381 G1 backed by `bls12_381`

use crate::{Curve, Endianness};
use bls12_381::{G1Affine, G1Projective, Scalar};

/// The BLS12-381 curve, group G1
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bls12381;

impl Curve for Bls12381 {
    type Scalar = Scalar;
    type Point = G1Projective;

    const NAME: &'static str = "bls12-381";
    const SCALAR_ENDIANNESS: Endianness = Endianness::Little;

    fn map_candidate(candidate: &[u8; 64]) -> Option<G1Projective> {
        let mut bytes = [0u8; 48];
        bytes.copy_from_slice(&candidate[..48]);
        // compression flag set, infinity and sort flags clear
        bytes[0] = (bytes[0] & 0b0001_1111) | 0b1000_0000;

        // G1 has a large cofactor, so decode without the subgroup check and clear it
        Option::<G1Affine>::from(G1Affine::from_compressed_unchecked(&bytes))
            .map(|point| G1Projective::from(point).clear_cofactor())
    }

    cached_params!(Bls12381);
}
