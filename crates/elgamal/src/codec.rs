//! Shared byte and base64 encoding of ciphertext pairs

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use bulletproofs_core::{BulletproofsError, BulletproofsResult, Curve, GroupElement};

pub(crate) fn encode_pair<C: Curve>(cl: &GroupElement<C>, cr: &GroupElement<C>) -> Vec<u8> {
    let mut bytes = cl.to_bytes();
    bytes.extend_from_slice(&cr.to_bytes());
    bytes
}

pub(crate) fn decode_pair<C: Curve>(
    bytes: &[u8],
) -> BulletproofsResult<(GroupElement<C>, GroupElement<C>)> {
    let point_size = C::point_size();
    if bytes.len() != 2 * point_size {
        return Err(BulletproofsError::SerializationError(format!(
            "ciphertext must be {} bytes, got {}",
            2 * point_size,
            bytes.len()
        )));
    }
    let cl = GroupElement::from_bytes(&bytes[..point_size])?;
    let cr = GroupElement::from_bytes(&bytes[point_size..])?;
    Ok((cl, cr))
}

pub(crate) fn to_base64(bytes: &[u8]) -> String {
    BASE64.encode(bytes)
}

pub(crate) fn from_base64(text: &str) -> BulletproofsResult<Vec<u8>> {
    BASE64
        .decode(text)
        .map_err(|e| BulletproofsError::SerializationError(format!("invalid base64: {e}")))
}
