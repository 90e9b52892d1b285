//! Concrete curve backends

/// Implements [`Curve::params`](crate::Curve::params) with a per-curve `OnceLock`.
macro_rules! cached_params {
    ($curve:ty) => {
        fn params() -> $crate::BulletproofsResult<&'static $crate::CurveParams<Self>> {
            static PARAMS: std::sync::OnceLock<
                $crate::BulletproofsResult<$crate::CurveParams<$curve>>,
            > = std::sync::OnceLock::new();
            PARAMS
                .get_or_init($crate::CurveParams::<$curve>::new)
                .as_ref()
                .map_err(Clone::clone)
        }
    };
}

mod bls12381;
mod bn254;
mod edwards;
mod ristretto;
mod secp256k1;

pub use self::bls12381::Bls12381;
pub use self::bn254::Bn254;
pub use self::edwards::Jubjub;
pub use self::ristretto::Ristretto;
pub use self::secp256k1::Secp256k1;
