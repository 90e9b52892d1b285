//! Bounded discrete logarithm search

use bulletproofs_core::{Curve, GroupElement};

/// Find `i` in `[start, max)` with `base^i == target`.
///
/// Walks the range with one group addition per candidate. Returns `None` when the range is
/// exhausted.
pub fn bounded_discrete_log<C: Curve>(
    target: &GroupElement<C>,
    base: &GroupElement<C>,
    start: u64,
    max: u64,
) -> Option<u64> {
    if start >= max {
        return None;
    }

    let mut current = *base * C::Scalar::from(start);
    for i in start..max {
        if current == *target {
            return Some(i);
        }
        current += *base;
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use bulletproofs_core::curves::Secp256k1;
    use k256::Scalar;

    #[test]
    fn test_finds_exponent_in_range() {
        let base = GroupElement::<Secp256k1>::generator();
        let target = base * Scalar::from(37u64);
        assert_eq!(bounded_discrete_log(&target, &base, 0, 100), Some(37));
        assert_eq!(bounded_discrete_log(&target, &base, 30, 40), Some(37));
    }

    #[test]
    fn test_exhaustion_returns_none() {
        let base = GroupElement::<Secp256k1>::generator();
        let target = base * Scalar::from(37u64);
        assert_eq!(bounded_discrete_log(&target, &base, 0, 37), None);
        assert_eq!(bounded_discrete_log(&target, &base, 38, 100), None);
        assert_eq!(bounded_discrete_log(&target, &base, 50, 10), None);
    }

    #[test]
    fn test_zero_is_identity() {
        let base = GroupElement::<Secp256k1>::generator();
        assert_eq!(bounded_discrete_log(&GroupElement::identity(), &base, 0, 5), Some(0));
    }
}
