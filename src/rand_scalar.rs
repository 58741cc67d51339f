//! Uniform scalar sampling from an external randomness source.

use num_bigint::BigUint;
use rand_core::{CryptoRng, RngCore};

use crate::curve::Curve;
use crate::error::SignatureError;

/// Draw a uniform scalar in `[1, N-1]`.
///
/// Reads eight bytes more than the order's width so the reduction bias is
/// negligible, per the procedure in FIPS 186-3 appendix A.2.1. A failed read
/// surfaces as [`SignatureError::Entropy`].
pub fn random_scalar<R>(curve: &dyn Curve, rng: &mut R) -> Result<BigUint, SignatureError>
where
    R: RngCore + CryptoRng,
{
    let mut buf = vec![0u8; curve.bit_size() / 8 + 8];
    rng.try_fill_bytes(&mut buf)
        .map_err(|_| SignatureError::Entropy)?;

    let k = BigUint::from_bytes_be(&buf) % (curve.order() - 1u32) + 1u32;
    Ok(k)
}
