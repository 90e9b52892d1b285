//! Range proof configuration

use bulletproofs_core::{is_power_of_two, BulletproofsError, BulletproofsResult};
use serde::{Deserialize, Serialize};

/// Largest supported bit length per value
pub const MAX_RANGE_BITS: usize = 32;

/// Largest number of values in one aggregated proof
pub const MAX_AGGREGATION: usize = 64;

/// Configuration for range proof setup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RangeProofConfig {
    /// Bits per proven value, a power of two up to [`MAX_RANGE_BITS`]
    pub bit_length: usize,
    /// Values per aggregated proof, a power of two up to [`MAX_AGGREGATION`]
    pub aggregation: usize,
    /// Run batch proving and verification on the rayon pool
    pub parallel: bool,
}

impl Default for RangeProofConfig {
    fn default() -> Self {
        Self {
            bit_length: MAX_RANGE_BITS,
            aggregation: 1,
            parallel: true,
        }
    }
}

impl RangeProofConfig {
    pub fn validate(&self) -> BulletproofsResult<()> {
        validate_bit_length(self.bit_length)?;
        validate_aggregation(self.aggregation)
    }
}

pub(crate) fn validate_bit_length(bits: usize) -> BulletproofsResult<()> {
    if !is_power_of_two(bits) {
        return Err(BulletproofsError::NotPowerOfTwo(bits));
    }
    if bits > MAX_RANGE_BITS {
        return Err(BulletproofsError::InvalidParameters(format!(
            "bit length {bits} exceeds the maximum of {MAX_RANGE_BITS}"
        )));
    }
    Ok(())
}

pub(crate) fn validate_aggregation(m: usize) -> BulletproofsResult<()> {
    if !is_power_of_two(m) {
        return Err(BulletproofsError::NotPowerOfTwo(m));
    }
    if m > MAX_AGGREGATION {
        return Err(BulletproofsError::InvalidParameters(format!(
            "aggregation of {m} values exceeds the maximum of {MAX_AGGREGATION}"
        )));
    }
    Ok(())
}
