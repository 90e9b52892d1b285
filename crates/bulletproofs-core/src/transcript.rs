//! Transcript management for the Fiat-Shamir heuristic
//!
//! A transcript is the byte concatenation of the encoded public values in the order they are
//! appended. A challenge is SHA-256 of everything appended so far, read as a big-endian integer
//! and reduced modulo the group order. Prover and verifier must append the same values in the
//! same order; the helpers below fix that order for the range proof and inner product argument.
//!
//! A range proof runs one transcript from start to finish: it absorbs `n`, `m` and every value
//! commitment `V_j` before `A, S`, so `y, z` depend on the statement, and `x` continues the same
//! transcript after `y, z` with `T1, T2`.

use crate::{scalar::scalar_from_bytes_mod_order, Curve, GroupElement};
use sha2::{Digest, Sha256};
use std::marker::PhantomData;

/// Append-only Fiat-Shamir transcript
#[derive(Debug, Clone)]
pub struct Transcript<C: Curve> {
    buffer: Vec<u8>,
    _curve: PhantomData<C>,
}

impl<C: Curve> Default for Transcript<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Curve> Transcript<C> {
    /// Empty transcript
    pub fn new() -> Self {
        Self {
            buffer: Vec::new(),
            _curve: PhantomData,
        }
    }

    /// Append a group element
    pub fn append_point(&mut self, point: &GroupElement<C>) {
        self.buffer.extend_from_slice(&point.to_bytes());
    }

    /// Append a sequence of group elements
    pub fn append_points(&mut self, points: &[GroupElement<C>]) {
        for point in points {
            self.append_point(point);
        }
    }

    /// Append a scalar in its big-endian encoding
    pub fn append_scalar(&mut self, scalar: &C::Scalar) {
        self.buffer.extend_from_slice(&C::scalar_to_bytes(scalar));
    }

    /// Append a length or count as a big-endian `u64`
    pub fn append_u64(&mut self, value: u64) {
        self.buffer.extend_from_slice(&value.to_be_bytes());
    }

    /// Hash of everything appended so far, reduced into the scalar field
    pub fn challenge_scalar(&self) -> C::Scalar {
        let digest = Sha256::digest(&self.buffer);
        scalar_from_bytes_mod_order(&digest)
    }

    /// Absorb `a, b` and extract `y = H(.. || a || b)`, `z = H(.. || a || b || y)`.
    ///
    /// `z` is absorbed as well, so every later challenge depends on both.
    pub fn challenge_pair(&mut self, a: &GroupElement<C>, b: &GroupElement<C>) -> (C::Scalar, C::Scalar) {
        self.append_point(a);
        self.append_point(b);
        let y = self.challenge_scalar();
        self.append_scalar(&y);
        let z = self.challenge_scalar();
        self.append_scalar(&z);
        (y, z)
    }
}

/// Two challenges from a pair of commitments: `y = H(a || b)`, `z = H(a || b || y)`
pub fn hash_bp<C: Curve>(a: &GroupElement<C>, b: &GroupElement<C>) -> (C::Scalar, C::Scalar) {
    Transcript::<C>::new().challenge_pair(a, b)
}

/// Transcript of a range proof over `n`-bit values, bound to `n`, `m` and every commitment
pub fn range_transcript<C: Curve>(n: usize, commitments: &[GroupElement<C>]) -> Transcript<C> {
    let mut transcript = Transcript::new();
    transcript.append_u64(n as u64);
    transcript.append_u64(commitments.len() as u64);
    transcript.append_points(commitments);
    transcript
}

/// Range proof challenges `y, z` from `A, S`
pub fn range_challenges_yz<C: Curve>(
    transcript: &mut Transcript<C>,
    a: &GroupElement<C>,
    s: &GroupElement<C>,
) -> (C::Scalar, C::Scalar) {
    transcript.challenge_pair(a, s)
}

/// Range proof challenge `x` from `T1, T2`, continuing after `y, z`
pub fn range_challenge_x<C: Curve>(
    transcript: &mut Transcript<C>,
    t1: &GroupElement<C>,
    t2: &GroupElement<C>,
) -> C::Scalar {
    transcript.append_point(t1);
    transcript.append_point(t2);
    transcript.challenge_scalar()
}

/// Inner product setup challenge `H(g_vec || h_vec || P || c)`
pub fn hash_ip<C: Curve>(
    g_vec: &[GroupElement<C>],
    h_vec: &[GroupElement<C>],
    p: &GroupElement<C>,
    c: &C::Scalar,
) -> C::Scalar {
    let mut transcript = Transcript::<C>::new();
    transcript.append_points(g_vec);
    transcript.append_points(h_vec);
    transcript.append_point(p);
    transcript.append_scalar(c);
    transcript.challenge_scalar()
}

/// Inner product round challenge `H(L || R)`
pub fn hash_round<C: Curve>(l: &GroupElement<C>, r: &GroupElement<C>) -> C::Scalar {
    let mut transcript = Transcript::<C>::new();
    transcript.append_point(l);
    transcript.append_point(r);
    transcript.challenge_scalar()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curves::Secp256k1;
    use k256::Scalar;

    type Point = GroupElement<Secp256k1>;

    #[test]
    fn test_transcript_deterministic() {
        let point = Point::generator();
        let scalar = Scalar::from(42u64);

        let mut transcript1 = Transcript::<Secp256k1>::new();
        let mut transcript2 = Transcript::<Secp256k1>::new();

        transcript1.append_point(&point);
        transcript1.append_scalar(&scalar);

        transcript2.append_point(&point);
        transcript2.append_scalar(&scalar);

        assert_eq!(transcript1.challenge_scalar(), transcript2.challenge_scalar());
    }

    #[test]
    fn test_challenge_is_sha256_of_concatenation() {
        let a = Point::generator();
        let b = Point::generator() * Scalar::from(2u64);

        let mut bytes = a.to_bytes();
        bytes.extend_from_slice(&b.to_bytes());
        let digest = Sha256::digest(&bytes);
        let expected: Scalar = scalar_from_bytes_mod_order(&digest);

        assert_eq!(hash_round(&a, &b), expected);
        assert_eq!(hash_bp(&a, &b).0, expected);
    }

    #[test]
    fn test_second_challenge_chains_the_first() {
        let a = Point::generator();
        let b = Point::generator() * Scalar::from(5u64);
        let (y, z) = hash_bp(&a, &b);

        let mut transcript = Transcript::<Secp256k1>::new();
        transcript.append_point(&a);
        transcript.append_point(&b);
        transcript.append_scalar(&y);
        assert_eq!(transcript.challenge_scalar(), z);
        assert_ne!(y, z);
    }

    #[test]
    fn test_range_challenges_bind_the_statement() {
        let v = Point::generator() * Scalar::from(11u64);
        let a = Point::generator() * Scalar::from(2u64);
        let s = Point::generator() * Scalar::from(3u64);
        let t1 = Point::generator() * Scalar::from(4u64);
        let t2 = Point::generator() * Scalar::from(5u64);

        let challenges = |n: usize, commitments: &[Point]| {
            let mut transcript = range_transcript(n, commitments);
            let (y, z) = range_challenges_yz(&mut transcript, &a, &s);
            let x = range_challenge_x(&mut transcript, &t1, &t2);
            (y, z, x)
        };

        let base = challenges(32, &[v]);
        let shifted = challenges(32, &[v + Point::generator()]);
        assert_ne!(base.0, shifted.0);
        assert_ne!(base.1, shifted.1);
        assert_ne!(base.2, shifted.2);

        assert_ne!(base.0, challenges(16, &[v]).0);
        assert_ne!(base.0, challenges(32, &[v, v]).0);
        assert_ne!(base.0, hash_bp(&a, &s).0);
        assert_ne!(base.2, hash_bp(&t1, &t2).0);
    }

    #[test]
    fn test_x_depends_on_y_and_z() {
        let a = Point::generator() * Scalar::from(2u64);
        let s = Point::generator() * Scalar::from(3u64);
        let t1 = Point::generator() * Scalar::from(4u64);
        let t2 = Point::generator() * Scalar::from(5u64);

        let mut transcript = range_transcript::<Secp256k1>(8, &[]);
        let (y, z) = range_challenges_yz(&mut transcript, &a, &s);
        let x = range_challenge_x(&mut transcript, &t1, &t2);

        let mut expected = range_transcript::<Secp256k1>(8, &[]);
        expected.append_point(&a);
        expected.append_point(&s);
        expected.append_scalar(&y);
        expected.append_scalar(&z);
        expected.append_point(&t1);
        expected.append_point(&t2);
        assert_eq!(expected.challenge_scalar(), x);

        let mut swapped = range_transcript::<Secp256k1>(8, &[]);
        range_challenges_yz(&mut swapped, &s, &a);
        assert_ne!(range_challenge_x(&mut swapped, &t1, &t2), x);
    }

    #[test]
    fn test_order_matters() {
        let a = Point::generator();
        let b = Point::generator() * Scalar::from(3u64);
        assert_ne!(hash_bp(&a, &b), hash_bp(&b, &a));
        assert_ne!(hash_round(&a, &b), hash_round(&b, &a));
    }

    #[test]
    fn test_hash_ip_binds_every_input() {
        let g = vec![Point::generator(), Point::generator() * Scalar::from(2u64)];
        let h = vec![Point::generator() * Scalar::from(3u64), Point::generator() * Scalar::from(4u64)];
        let p = Point::generator() * Scalar::from(5u64);
        let c = Scalar::from(6u64);

        let base = hash_ip(&g, &h, &p, &c);
        assert_ne!(base, hash_ip(&h, &g, &p, &c));
        assert_ne!(base, hash_ip(&g, &h, &(p + p), &c));
        assert_ne!(base, hash_ip(&g, &h, &p, &Scalar::from(7u64)));
    }
}
