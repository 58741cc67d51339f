use crate::prelude::*;

use core::fmt;

use num_bigint::BigUint;
use rand_core::{CryptoRng, RngCore};

use crate::curve::{Curve, Point};
use crate::error::SignatureError;
use crate::rand_scalar::random_scalar;

/// A public key: a curve descriptor and a non-identity point on it.
#[derive(Clone, Debug)]
pub struct PublicKey {
    pub(crate) curve: &'static dyn Curve,
    pub(crate) point: Point,
}

impl PublicKey {
    /// Wrap a point as a public key, or `None` if it is not on the curve.
    pub fn new(curve: &'static dyn Curve, point: Point) -> Option<PublicKey> {
        if curve.on_curve(&point) {
            Some(PublicKey { curve, point })
        } else {
            None
        }
    }

    pub fn curve(&self) -> &'static dyn Curve {
        self.curve
    }

    pub fn point(&self) -> &Point {
        &self.point
    }
}

impl PartialEq for PublicKey {
    fn eq(&self, other: &PublicKey) -> bool {
        self.curve.name() == other.curve.name() && self.point == other.point
    }
}

impl Eq for PublicKey {}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X({})\nY({})\n", self.point.x, self.point.y)
    }
}

/// A private key and the public key derived from it.
#[derive(Clone, Debug)]
pub struct PrivateKey {
    pub(crate) public: PublicKey,
    pub(crate) scalar: BigUint,
}

impl PrivateKey {
    pub fn public(&self) -> &PublicKey {
        &self.public
    }

    pub(crate) fn scalar(&self) -> &BigUint {
        &self.scalar
    }
}

/// Generates a keypair on `curve`: a scalar `x` in `[1, N-1]` and the point
/// `x * G`.
pub fn generate_key<R>(
    curve: &'static dyn Curve,
    rng: &mut R,
) -> Result<PrivateKey, SignatureError>
where
    R: RngCore + CryptoRng,
{
    let scalar = random_scalar(curve, rng)?;
    let point = curve.base_mul(&scalar);
    Ok(PrivateKey {
        public: PublicKey { curve, point },
        scalar,
    })
}

/// The ordered list of public keys a signer hides among.
///
/// All members must share one curve; duplicates are permitted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKeyRing {
    pub ring: Vec<PublicKey>,
}

impl PublicKeyRing {
    /// An empty ring with room for `cap` keys.
    pub fn with_capacity(cap: usize) -> PublicKeyRing {
        PublicKeyRing {
            ring: Vec::with_capacity(cap),
        }
    }

    /// Appends a public key to the ring.
    pub fn add(&mut self, key: PublicKey) {
        self.ring.push(key);
    }

    pub fn len(&self) -> usize {
        self.ring.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    /// The ring's canonical hash-input bytes: every member's X coordinate
    /// then Y coordinate, minimal big-endian, no delimiters.
    pub fn bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        for key in &self.ring {
            key.point.append_bytes(&mut out);
        }
        out
    }
}
