//! WARNING: THIS CRATE SHOULD NOT BE USED IN ANY SERIOUS CONTEXTS. IT IS NOT SECURE.
//!
//! This is an implementation of the [Unique Ring Signature scheme by Matthew Franklin and
//! Haibin Zhang](https://eprint.iacr.org/2012/577.pdf) over NIST P-256. A signer holding one
//! private key out of a ring of public keys signs a message so that a verifier learns only
//! that *some* ring member signed. Every signature carries a tag that is the same for all
//! signatures a given key produces on a given (message, ring) pair, so double-signing is
//! detectable without revealing who signed.
//!
//! Example usage:
//!
//! ```
//! # fn main() {
//! use unique_ringsig::{generate_key, linked, p256, sign, verify, PublicKeyRing};
//! # let mut rng = rand::thread_rng();
//!
//! let msg = b"now that the party is jumping";
//!
//! // Make some keypairs for our ring. Pretend we only have the private key of the first.
//! let my_key = generate_key(p256(), &mut rng).unwrap();
//! let key2 = generate_key(p256(), &mut rng).unwrap();
//! let key3 = generate_key(p256(), &mut rng).unwrap();
//!
//! let mut ring = PublicKeyRing::with_capacity(3);
//! ring.add(my_key.public().clone());
//! ring.add(key2.public().clone());
//! ring.add(key3.public().clone());
//!
//! let sig1 = sign(&mut rng, &my_key, &ring, msg).unwrap();
//! assert!(verify(&ring, msg, &sig1));
//!
//! // Sign the same message under the same ring again. This is a no-no. The two
//! // signatures differ, but their tags match, and we have been caught.
//! let sig2 = sign(&mut rng, &my_key, &ring, msg).unwrap();
//! assert!(verify(&ring, msg, &sig2));
//! assert_ne!(sig1, sig2);
//! assert!(linked(&sig1, &sig2));
//! # }
//! ```

//-------- no_std stuff --------//

#![no_std]

#[cfg(feature = "std")]
#[macro_use]
extern crate std;

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

//-------- Testing stuff --------//

#[cfg(test)]
mod test_utils;

//-------- Modules and exports--------//

pub mod curve;
pub mod error;
pub mod hash;
pub mod key;
mod prelude;
pub mod rand_scalar;
pub mod sig;

pub use curve::*;
pub use error::*;
pub use hash::*;
pub use key::*;
pub use rand_scalar::*;
pub use sig::*;
