//! Pedersen commitments `C = G^x * H^r`

use crate::{BulletproofsResult, Curve, GroupElement};

/// The pair of generators a Pedersen commitment is taken over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PedersenGens<C: Curve> {
    /// Value generator
    pub g: GroupElement<C>,
    /// Blinding generator
    pub h: GroupElement<C>,
}

impl<C: Curve> PedersenGens<C> {
    /// Commit over explicit generators
    pub fn new(g: GroupElement<C>, h: GroupElement<C>) -> Self {
        Self { g, h }
    }

    /// The curve's default pair: base point and NUMS blinding generator
    pub fn standard() -> BulletproofsResult<Self> {
        let params = C::params()?;
        Ok(Self::new(params.g, params.h))
    }

    /// `G^value * H^blinding`
    pub fn commit(&self, value: C::Scalar, blinding: C::Scalar) -> GroupElement<C> {
        self.g * value + self.h * blinding
    }

    /// Check that `commitment` opens to `(value, blinding)`
    pub fn open(&self, commitment: &GroupElement<C>, value: C::Scalar, blinding: C::Scalar) -> bool {
        self.commit(value, blinding) == *commitment
    }
}

/// `Commit(value, blinding, G, H) = G^value * H^blinding`
pub fn commit<C: Curve>(
    value: C::Scalar,
    blinding: C::Scalar,
    g: &GroupElement<C>,
    h: &GroupElement<C>,
) -> GroupElement<C> {
    PedersenGens::new(*g, *h).commit(value, blinding)
}
