//! The curve adapter: affine points with arbitrary-precision coordinates and
//! a uniform interface over the underlying group arithmetic.

use crate::prelude::*;

use core::fmt;

use num_bigint::BigUint;
use num_traits::Zero;
use p256::elliptic_curve::bigint::{Encoding, U256};
use p256::elliptic_curve::ops::Reduce;
use p256::elliptic_curve::sec1::{FromEncodedPoint, ToEncodedPoint};
use p256::elliptic_curve::Curve as EllipticCurve;
use p256::{AffinePoint, EncodedPoint, FieldBytes, NistP256, ProjectivePoint, Scalar};

/// An affine curve point. The pair `(0, 0)` stands in for the identity
/// element, which is never an affine point on a curve with `b != 0`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Point {
    pub x: BigUint,
    pub y: BigUint,
}

impl Point {
    /// The identity element, encoded as `(0, 0)`.
    pub fn identity() -> Point {
        Point {
            x: BigUint::zero(),
            y: BigUint::zero(),
        }
    }

    pub fn is_identity(&self) -> bool {
        self.x.is_zero() && self.y.is_zero()
    }

    // Minimal big-endian coordinate bytes for hashing: X then Y, no padding,
    // and a zero coordinate contributes no bytes at all.
    pub(crate) fn append_bytes(&self, out: &mut Vec<u8>) {
        append_int(out, &self.x);
        append_int(out, &self.y);
    }
}

pub(crate) fn append_int(out: &mut Vec<u8>, n: &BigUint) {
    if !n.is_zero() {
        out.extend_from_slice(&n.to_bytes_be());
    }
}

/// A prime-order curve of cofactor 1.
///
/// Scalar arguments are taken modulo the group order. The arithmetic methods
/// expect points that pass `on_curve` (or the identity); anything else is
/// folded to the identity.
pub trait Curve: fmt::Debug + Send + Sync {
    /// A short identifier for the curve, e.g. `"P-256"`.
    fn name(&self) -> &'static str;

    /// `k * G` for the curve's base point `G`.
    fn base_mul(&self, k: &BigUint) -> Point;

    /// `k * P`.
    fn mul(&self, p: &Point, k: &BigUint) -> Point;

    /// `P + Q`.
    fn add(&self, p: &Point, q: &Point) -> Point;

    /// Whether `p` is a non-identity point satisfying the curve equation.
    fn on_curve(&self, p: &Point) -> bool;

    /// The group order N.
    fn order(&self) -> BigUint;

    /// The bit length of the group order.
    fn bit_size(&self) -> usize;
}

/// The NIST P-256 adapter.
#[derive(Debug)]
pub struct P256;

static P256_CURVE: P256 = P256;

/// The P-256 curve descriptor.
pub fn p256() -> &'static dyn Curve {
    &P256_CURVE
}

impl P256 {
    fn to_scalar(&self, k: &BigUint) -> Scalar {
        let k = k % self.order();
        let bytes = k.to_bytes_be();
        let mut buf = [0u8; 32];
        buf[32 - bytes.len()..].copy_from_slice(&bytes);
        <Scalar as Reduce<U256>>::reduce_bytes(&buf.into())
    }

    fn to_affine(&self, p: &Point) -> Option<AffinePoint> {
        let x = field_bytes(&p.x)?;
        let y = field_bytes(&p.y)?;
        let encoded = EncodedPoint::from_affine_coordinates(&x, &y, false);
        Option::from(AffinePoint::from_encoded_point(&encoded))
    }

    fn to_projective(&self, p: &Point) -> ProjectivePoint {
        if p.is_identity() {
            return ProjectivePoint::IDENTITY;
        }
        match self.to_affine(p) {
            Some(affine) => ProjectivePoint::from(affine),
            None => ProjectivePoint::IDENTITY,
        }
    }

    fn from_projective(&self, p: &ProjectivePoint) -> Point {
        let encoded = p.to_affine().to_encoded_point(false);
        match (encoded.x(), encoded.y()) {
            (Some(x), Some(y)) => Point {
                x: BigUint::from_bytes_be(x),
                y: BigUint::from_bytes_be(y),
            },
            _ => Point::identity(),
        }
    }
}

// Fixed-width big-endian field bytes, or None for a value too wide to fit.
fn field_bytes(n: &BigUint) -> Option<FieldBytes> {
    let bytes = n.to_bytes_be();
    if bytes.len() > 32 {
        return None;
    }
    let mut buf = [0u8; 32];
    buf[32 - bytes.len()..].copy_from_slice(&bytes);
    Some(buf.into())
}

impl Curve for P256 {
    fn name(&self) -> &'static str {
        "P-256"
    }

    fn base_mul(&self, k: &BigUint) -> Point {
        self.from_projective(&(ProjectivePoint::GENERATOR * self.to_scalar(k)))
    }

    fn mul(&self, p: &Point, k: &BigUint) -> Point {
        self.from_projective(&(self.to_projective(p) * self.to_scalar(k)))
    }

    fn add(&self, p: &Point, q: &Point) -> Point {
        self.from_projective(&(self.to_projective(p) + self.to_projective(q)))
    }

    fn on_curve(&self, p: &Point) -> bool {
        !p.is_identity() && self.to_affine(p).is_some()
    }

    fn order(&self) -> BigUint {
        BigUint::from_bytes_be(&<NistP256 as EllipticCurve>::ORDER.to_be_bytes())
    }

    fn bit_size(&self) -> usize {
        256
    }
}
