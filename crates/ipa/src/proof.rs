//! Inner Product Argument proof structure

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use bulletproofs_core::{
    log2_exact, scalar::scalar_serde, BulletproofsError, BulletproofsResult, Curve, GroupElement,
};
use byteorder::{BigEndian, ByteOrder};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// An inner product argument proof
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct InnerProductProof<C: Curve> {
    /// Length of the proven vectors
    pub n: usize,
    /// L values from each folding round (log_2(n) elements)
    pub l_vec: Vec<GroupElement<C>>,
    /// R values from each folding round (log_2(n) elements)
    pub r_vec: Vec<GroupElement<C>>,
    /// Final scalar value a
    #[serde(with = "scalar_serde")]
    pub a: C::Scalar,
    /// Final scalar value b
    #[serde(with = "scalar_serde")]
    pub b: C::Scalar,
}

impl<C: Curve> InnerProductProof<C> {
    /// Get the number of folding rounds
    pub fn num_rounds(&self) -> usize {
        self.l_vec.len()
    }

    /// Validate proof structure against its declared length
    pub fn validate_structure(&self) -> BulletproofsResult<()> {
        let rounds = log2_exact(self.n)
            .map_err(|_| BulletproofsError::InvalidProof(format!("length {} is not a power of two", self.n)))?;

        if self.l_vec.len() != self.r_vec.len() {
            return Err(BulletproofsError::InvalidProof(
                "L and R vectors must have the same length".to_string(),
            ));
        }

        if self.l_vec.len() != rounds {
            return Err(BulletproofsError::InvalidProof(format!(
                "Expected {} rounds for vector length {}, got {}",
                rounds,
                self.n,
                self.l_vec.len()
            )));
        }

        Ok(())
    }

    /// Encoded size for a proof of vector length `n`
    pub fn encoded_size(n: usize) -> usize {
        let rounds = n.trailing_zeros() as usize;
        4 + 2 * rounds * C::point_size() + 2 * C::scalar_size()
    }

    /// Get proof size in bytes
    pub fn size_bytes(&self) -> usize {
        4 + (self.l_vec.len() + self.r_vec.len()) * C::point_size() + 2 * C::scalar_size()
    }

    /// Serialize proof to bytes: `n || L_0..L_k || R_0..R_k || a || b`
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut result = Vec::with_capacity(self.size_bytes());

        let mut header = [0u8; 4];
        BigEndian::write_u32(&mut header, self.n as u32);
        result.extend_from_slice(&header);

        for point in self.l_vec.iter().chain(self.r_vec.iter()) {
            result.extend_from_slice(&point.to_bytes());
        }

        result.extend_from_slice(&C::scalar_to_bytes(&self.a));
        result.extend_from_slice(&C::scalar_to_bytes(&self.b));

        result
    }

    /// Deserialize proof from bytes
    pub fn from_bytes(bytes: &[u8]) -> BulletproofsResult<Self> {
        if bytes.len() < 4 {
            return Err(BulletproofsError::InvalidProof("Insufficient bytes for proof".to_string()));
        }

        let n = BigEndian::read_u32(&bytes[..4]) as usize;
        let rounds = log2_exact(n)
            .map_err(|_| BulletproofsError::InvalidProof(format!("length {n} is not a power of two")))?;

        let expected_size = Self::encoded_size(n);
        if bytes.len() != expected_size {
            return Err(BulletproofsError::InvalidProof(format!(
                "Invalid proof size: expected {}, got {}",
                expected_size,
                bytes.len()
            )));
        }

        let point_size = C::point_size();
        let scalar_size = C::scalar_size();
        let mut points = bytes[4..4 + 2 * rounds * point_size]
            .chunks_exact(point_size)
            .map(GroupElement::<C>::from_bytes)
            .collect::<BulletproofsResult<Vec<_>>>()?;
        let r_vec = points.split_off(rounds);
        let l_vec = points;

        let offset = 4 + 2 * rounds * point_size;
        let a = C::scalar_from_bytes(&bytes[offset..offset + scalar_size])?;
        let b = C::scalar_from_bytes(&bytes[offset + scalar_size..])?;

        Ok(Self { n, l_vec, r_vec, a, b })
    }
}

impl<C: Curve> fmt::Display for InnerProductProof<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&BASE64.encode(self.to_bytes()))
    }
}

impl<C: Curve> FromStr for InnerProductProof<C> {
    type Err = BulletproofsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = BASE64
            .decode(s)
            .map_err(|e| BulletproofsError::SerializationError(format!("invalid base64: {e}")))?;
        Self::from_bytes(&bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bulletproofs_core::curves::Secp256k1;
    use k256::Scalar;

    fn dummy_proof(n: usize) -> InnerProductProof<Secp256k1> {
        let rounds = n.trailing_zeros() as usize;
        let g = GroupElement::<Secp256k1>::generator();
        InnerProductProof {
            n,
            l_vec: (0..rounds).map(|i| g * Scalar::from(i as u64 + 1)).collect(),
            r_vec: (0..rounds).map(|i| g * Scalar::from(i as u64 + 100)).collect(),
            a: Scalar::from(42u64),
            b: Scalar::from(37u64),
        }
    }

    #[test]
    fn test_proof_validation() {
        assert!(dummy_proof(8).validate_structure().is_ok());
        assert!(dummy_proof(1).validate_structure().is_ok());

        let mut proof = dummy_proof(8);
        proof.r_vec.pop();
        assert!(proof.validate_structure().is_err());

        let mut proof = dummy_proof(8);
        proof.n = 16;
        assert!(proof.validate_structure().is_err());
    }

    #[test]
    fn test_proof_size() {
        // 3 L values + 3 R values + 2 scalars + header = 6*33 + 64 + 4
        let proof = dummy_proof(8);
        assert_eq!(proof.size_bytes(), 266);
        assert_eq!(proof.to_bytes().len(), 266);
        assert_eq!(InnerProductProof::<Secp256k1>::encoded_size(8), 266);
    }

    #[test]
    fn test_bytes_layout() {
        let proof = dummy_proof(4);
        let bytes = proof.to_bytes();
        assert_eq!(&bytes[..4], &[0, 0, 0, 4]);
        assert_eq!(&bytes[4..37], proof.l_vec[0].to_bytes().as_slice());
        assert_eq!(&bytes[bytes.len() - 32..], Secp256k1::scalar_to_bytes(&proof.b).as_slice());
        assert_eq!(InnerProductProof::from_bytes(&bytes).unwrap(), proof);
    }

    #[test]
    fn test_malformed_bytes_rejected() {
        let bytes = dummy_proof(4).to_bytes();
        assert!(InnerProductProof::<Secp256k1>::from_bytes(&bytes[..3]).is_err());
        assert!(InnerProductProof::<Secp256k1>::from_bytes(&bytes[..bytes.len() - 1]).is_err());

        let mut wrong_n = bytes.clone();
        wrong_n[3] = 3;
        assert!(matches!(
            InnerProductProof::<Secp256k1>::from_bytes(&wrong_n),
            Err(BulletproofsError::InvalidProof(_))
        ));

        let mut bad_scalar = bytes.clone();
        let len = bad_scalar.len();
        bad_scalar[len - 32..].fill(0xff);
        assert!(InnerProductProof::<Secp256k1>::from_bytes(&bad_scalar).is_err());
    }

    #[test]
    fn test_text_and_serde() {
        let proof = dummy_proof(2);
        assert_eq!(proof.to_string().parse::<InnerProductProof<Secp256k1>>().unwrap(), proof);

        let json = serde_json::to_string(&proof).unwrap();
        assert_eq!(serde_json::from_str::<InnerProductProof<Secp256k1>>(&json).unwrap(), proof);
    }
}
