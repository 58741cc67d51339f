use crate::prelude::*;

use core::fmt;

use num_bigint::BigUint;
use num_traits::Zero;
use rand_core::{CryptoRng, RngCore};

use crate::curve::Point;
use crate::error::SignatureError;
use crate::hash::{h_int, h_point};
use crate::key::{PrivateKey, PublicKeyRing};
use crate::rand_scalar::random_scalar;

/// A unique ring signature. The size of `RingSign` scales proportionally
/// with the number of public keys in the ring.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RingSign {
    pub(crate) tau: Point,
    pub(crate) c: Vec<BigUint>,
    pub(crate) t: Vec<BigUint>,
}

impl RingSign {
    /// The signature's tag, `x * H(m || R)`.
    ///
    /// A given key produces the same tag for every signature on a given
    /// message and ring, regardless of signing randomness.
    pub fn tag(&self) -> &Point {
        &self.tau
    }
}

impl fmt::Display for RingSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "URS:")?;
        writeln!(f, "Hx={}", self.tau.x)?;
        writeln!(f, "Hy={}", self.tau.y)?;
        for (i, (c, t)) in self.c.iter().zip(self.t.iter()).enumerate() {
            writeln!(f, "C[{}]: {}", i, c)?;
            writeln!(f, "T[{}]: {}", i, t)?;
        }
        Ok(())
    }
}

/// Whether two signatures on the same message and ring were produced by the
/// same ring member. Does not reveal which member.
pub fn linked(a: &RingSign, b: &RingSign) -> bool {
    a.tau == b.tau
}

/// Sign an arbitrary-length message (which should NOT be the hash of a
/// larger message) with the given private key under the given ring.
///
/// The signer's public key must be a member of `ring`; with duplicates, the
/// first matching index is used. The security of the private key depends on
/// the entropy of `rng`.
///
/// Example:
///
/// ```
/// # fn main() {
/// use unique_ringsig::{generate_key, p256, sign, verify, PublicKeyRing};
/// # let mut rng = rand::thread_rng();
///
/// let msg = b"ready for the chumps on the wall";
///
/// let my_key = generate_key(p256(), &mut rng).unwrap();
/// let other = generate_key(p256(), &mut rng).unwrap();
///
/// let mut ring = PublicKeyRing::with_capacity(2);
/// ring.add(my_key.public().clone());
/// ring.add(other.public().clone());
///
/// let sig = sign(&mut rng, &my_key, &ring, msg).unwrap();
/// assert!(verify(&ring, msg, &sig));
/// # }
/// ```
pub fn sign<R>(
    rng: &mut R,
    privkey: &PrivateKey,
    ring: &PublicKeyRing,
    msg: &[u8],
) -> Result<RingSign, SignatureError>
where
    R: RngCore + CryptoRng,
{
    let s = ring.len();
    if s == 0 {
        return Err(SignatureError::EmptyRing);
    }
    let curve = privkey.public().curve();
    let n = curve.order();

    // The first ring slot holding the signer's key.
    let id = ring
        .ring
        .iter()
        .position(|member| member == privkey.public())
        .ok_or(SignatureError::SignerNotInRing)?;

    let mut m_r = msg.to_vec();
    m_r.extend_from_slice(&ring.bytes());

    // H(m || R), and the tag H(m || R)^x.
    let h = h_point(curve, &m_r);
    let tau = curve.mul(&h, privkey.scalar());

    let mut a = vec![Point::identity(); s];
    let mut b = vec![Point::identity(); s];
    let mut c = vec![BigUint::zero(); s];
    let mut t = vec![BigUint::zero(); s];

    // Blind every other ring slot: a_j = t_j*G + c_j*P_j, and
    // b_j = (x*c_j + t_j)*H, which equals c_j*tau + t_j*H.
    let mut sum = BigUint::zero();
    for j in 0..s {
        if j == id {
            continue;
        }
        c[j] = random_scalar(curve, rng)?;
        t[j] = random_scalar(curve, rng)?;

        let gt = curve.base_mul(&t[j]);
        let yc = curve.mul(ring.ring[j].point(), &c[j]);
        a[j] = curve.add(&gt, &yc);

        let w = (privkey.scalar() * &c[j] + &t[j]) % &n;
        b[j] = curve.mul(&h, &w);

        sum += &c[j];
    }

    // Unblinded commitments at the signer's slot.
    let r = random_scalar(curve, rng)?;
    a[id] = curve.base_mul(&r);
    b[id] = curve.mul(&h, &r);

    let mut m_r_ab = m_r;
    for j in 0..s {
        a[j].append_bytes(&mut m_r_ab);
        b[j].append_bytes(&mut m_r_ab);
    }
    let hash = h_int(curve, &m_r_ab);

    // c_id closes the challenge sum to the hash; t_id = r - x*c_id makes
    // both verification equations hold at the signer's slot.
    c[id] = ((hash % &n) + &n - sum % &n) % &n;
    t[id] = (&r + &n - privkey.scalar() * &c[id] % &n) % &n;

    Ok(RingSign { tau, c, t })
}

/// Verify a message against a signature under a ring. Malformed input of any
/// kind yields `false`, never a panic.
pub fn verify(ring: &PublicKeyRing, msg: &[u8], sig: &RingSign) -> bool {
    let s = ring.len();
    if s == 0 {
        return false;
    }
    if sig.c.len() != s || sig.t.len() != s {
        return false;
    }
    let curve = ring.ring[0].curve();
    let n = curve.order();

    if sig.tau.x.is_zero() || sig.tau.y.is_zero() {
        return false;
    }
    if sig.tau.x >= n || sig.tau.y >= n {
        return false;
    }
    if !curve.on_curve(&sig.tau) {
        return false;
    }

    let mut m_r = msg.to_vec();
    m_r.extend_from_slice(&ring.bytes());
    let h = h_point(curve, &m_r);

    // Recompute every commitment: a_j = t_j*G + c_j*P_j,
    // b_j = t_j*H + c_j*tau.
    let mut sum = BigUint::zero();
    let mut a = Vec::with_capacity(s);
    let mut b = Vec::with_capacity(s);
    for j in 0..s {
        if sig.c[j] >= n || sig.t[j] >= n {
            return false;
        }
        let gt = curve.base_mul(&sig.t[j]);
        let yc = curve.mul(ring.ring[j].point(), &sig.c[j]);
        a.push(curve.add(&gt, &yc));

        let ht = curve.mul(&h, &sig.t[j]);
        let tc = curve.mul(&sig.tau, &sig.c[j]);
        b.push(curve.add(&ht, &tc));

        sum += &sig.c[j];
    }

    let mut m_r_ab = m_r;
    for j in 0..s {
        a[j].append_bytes(&mut m_r_ab);
        b[j].append_bytes(&mut m_r_ab);
    }
    let hash = h_int(curve, &m_r_ab) % &n;

    sum % &n == hash
}
