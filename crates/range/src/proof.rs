//! Range proof structure and serialization

use crate::config::{validate_aggregation, validate_bit_length};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use bulletproofs_core::{
    scalar::scalar_serde, BulletproofsError, BulletproofsResult, Curve, GroupElement,
};
use byteorder::{BigEndian, ByteOrder};
use ipa::InnerProductProof;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// A range proof that each committed value lies in `[0, 2^n)`
///
/// One value gives a plain Bulletproof; several values share one aggregated proof.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct RangeProof<C: Curve> {
    /// Bits per value
    pub n: usize,
    /// Pedersen commitments `V_j` to the proven values
    pub commitments: Vec<GroupElement<C>>,
    /// Commitment to the bit vectors
    pub a: GroupElement<C>,
    /// Commitment to the blinding vectors
    pub s: GroupElement<C>,
    pub t1: GroupElement<C>,
    pub t2: GroupElement<C>,
    /// `Gg^l * h'^r`, the statement of the inner product sub-proof
    pub commit: GroupElement<C>,
    #[serde(with = "scalar_serde")]
    pub taux: C::Scalar,
    #[serde(with = "scalar_serde")]
    pub mu: C::Scalar,
    #[serde(with = "scalar_serde")]
    pub t_hat: C::Scalar,
    pub ipp: InnerProductProof<C>,
}

impl<C: Curve> RangeProof<C> {
    /// Number of proven values
    pub fn aggregation(&self) -> usize {
        self.commitments.len()
    }

    /// Get proof size in bytes
    pub fn size_bytes(&self) -> usize {
        8 + (self.commitments.len() + 5) * C::point_size() + 3 * C::scalar_size() + self.ipp.size_bytes()
    }

    /// Serialize the proof to bytes
    ///
    /// Layout: `n || m || V_1..V_m || A || S || T1 || T2 || Commit || taux || mu || t_hat || ipp`,
    /// with `n` and `m` as big-endian `u32`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.size_bytes());

        let mut header = [0u8; 8];
        BigEndian::write_u32(&mut header[..4], self.n as u32);
        BigEndian::write_u32(&mut header[4..], self.commitments.len() as u32);
        bytes.extend_from_slice(&header);

        for point in self
            .commitments
            .iter()
            .chain([&self.a, &self.s, &self.t1, &self.t2, &self.commit])
        {
            bytes.extend_from_slice(&point.to_bytes());
        }
        for scalar in [&self.taux, &self.mu, &self.t_hat] {
            bytes.extend_from_slice(&C::scalar_to_bytes(scalar));
        }
        bytes.extend_from_slice(&self.ipp.to_bytes());

        bytes
    }

    /// Deserialize the proof from bytes
    pub fn from_bytes(bytes: &[u8]) -> BulletproofsResult<Self> {
        if bytes.len() < 8 {
            return Err(BulletproofsError::InvalidProof("Insufficient bytes for proof".to_string()));
        }

        let n = BigEndian::read_u32(&bytes[..4]) as usize;
        let m = BigEndian::read_u32(&bytes[4..8]) as usize;
        validate_bit_length(n).map_err(|e| BulletproofsError::InvalidProof(e.to_string()))?;
        validate_aggregation(m).map_err(|e| BulletproofsError::InvalidProof(e.to_string()))?;

        let point_size = C::point_size();
        let scalar_size = C::scalar_size();
        let points_end = 8 + (m + 5) * point_size;
        let scalars_end = points_end + 3 * scalar_size;
        let expected_size = scalars_end + InnerProductProof::<C>::encoded_size(n * m);
        if bytes.len() != expected_size {
            return Err(BulletproofsError::InvalidProof(format!(
                "Invalid proof size: expected {}, got {}",
                expected_size,
                bytes.len()
            )));
        }

        let mut points = bytes[8..points_end]
            .chunks_exact(point_size)
            .map(GroupElement::<C>::from_bytes)
            .collect::<BulletproofsResult<Vec<_>>>()?;
        let tail = points.split_off(m);
        let commitments = points;

        let scalars = bytes[points_end..scalars_end]
            .chunks_exact(scalar_size)
            .map(C::scalar_from_bytes)
            .collect::<BulletproofsResult<Vec<_>>>()?;

        let ipp = InnerProductProof::from_bytes(&bytes[scalars_end..])?;
        if ipp.n != n * m {
            return Err(BulletproofsError::InvalidProof(format!(
                "inner product proof has length {}, expected {}",
                ipp.n,
                n * m
            )));
        }

        Ok(Self {
            n,
            commitments,
            a: tail[0],
            s: tail[1],
            t1: tail[2],
            t2: tail[3],
            commit: tail[4],
            taux: scalars[0],
            mu: scalars[1],
            t_hat: scalars[2],
            ipp,
        })
    }
}

impl<C: Curve> fmt::Display for RangeProof<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&BASE64.encode(self.to_bytes()))
    }
}

impl<C: Curve> FromStr for RangeProof<C> {
    type Err = BulletproofsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = BASE64
            .decode(s)
            .map_err(|e| BulletproofsError::SerializationError(format!("invalid base64: {e}")))?;
        Self::from_bytes(&bytes)
    }
}
