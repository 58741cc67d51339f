//! The scheme's two hash functions: bytes to an integer of at most the
//! order's bit length, and bytes to a curve point.

use num_bigint::BigUint;
use sha2::{Digest, Sha256};

use crate::curve::{Curve, Point};

/// Hash bytes to an integer in `[0, 2^bit_size)`.
///
/// The SHA-256 digest is truncated to the order's byte length and any excess
/// bits are shifted out, following SEC1 (and OpenSSL). Callers reduce mod N
/// where the protocol requires it.
pub fn h_int(curve: &dyn Curve, m: &[u8]) -> BigUint {
    let digest = Sha256::digest(m);
    let order_bits = curve.bit_size();
    let order_bytes = (order_bits + 7) / 8;

    let used = if digest.len() > order_bytes {
        &digest[..order_bytes]
    } else {
        &digest[..]
    };

    let mut ret = BigUint::from_bytes_be(used);
    let excess = used.len() * 8;
    if excess > order_bits {
        ret >>= excess - order_bits;
    }
    ret
}

/// Hash bytes to a curve point as `SHA-256(m) * G`.
///
/// The discrete log of the result is public knowledge, which the scheme's
/// random-oracle argument tolerates. This is not a general hash-to-curve.
pub fn h_point(curve: &dyn Curve, m: &[u8]) -> Point {
    let digest = Sha256::digest(m);
    curve.base_mul(&BigUint::from_bytes_be(&digest))
}

#[cfg(test)]
mod test {
    use super::{h_int, h_point};
    use crate::curve::p256;

    use num_bigint::BigUint;

    #[test]
    fn test_h_int_known_vector() {
        // SHA-256("abc"); 256 digest bits == 256 order bits, so no shift.
        let expected = BigUint::parse_bytes(
            b"ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
            16,
        )
        .unwrap();
        assert_eq!(h_int(p256(), b"abc"), expected);
    }

    #[test]
    fn test_h_int_fits_order_bits() {
        for msg in [&b"abc"[..], b"", b"Hello, world."] {
            assert!(h_int(p256(), msg).bits() <= 256);
        }
    }

    #[test]
    fn test_h_point_is_digest_times_base() {
        let p = h_point(p256(), b"abc");
        assert!(p256().on_curve(&p));
        assert_eq!(p, p256().base_mul(&h_int(p256(), b"abc")));
    }
}
