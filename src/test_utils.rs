use crate::prelude::*;

use crate::curve::p256;
use crate::key::{generate_key, PrivateKey, PublicKeyRing};

use rand::{CryptoRng, Rng, RngCore};

// Testing context for convenience
pub(crate) struct Context {
    pub msg: Vec<u8>,
    pub ring: PublicKeyRing,
    pub keys: Vec<PrivateKey>,
}

// Construct a context for testing: a random message and a random-size ring,
// with the private key of every member. Ring order matches key order.
pub(crate) fn rand_ctx<R>(mut rng: R, min_ring_size: usize) -> Context
where
    R: Rng + CryptoRng + RngCore,
{
    let msg_len = rng.gen_range(1..50);
    let mut msg = vec![0u8; msg_len];
    rng.fill_bytes(&mut msg);

    let ring_size: usize = rng.gen_range(min_ring_size..min_ring_size + 20);

    let mut ring = PublicKeyRing::with_capacity(ring_size);
    let mut keys = Vec::new();
    for _ in 0..ring_size {
        let key = generate_key(p256(), &mut rng).unwrap();
        ring.add(key.public().clone());
        keys.push(key);
    }

    Context { msg, ring, keys }
}

// A reader with a byte budget. Once the budget runs out, every read errors,
// like an exhausted entropy source.
pub(crate) struct ShortRng {
    remaining: usize,
}

impl ShortRng {
    pub fn new(budget: usize) -> ShortRng {
        ShortRng { remaining: budget }
    }
}

impl RngCore for ShortRng {
    fn next_u32(&mut self) -> u32 {
        rand_core::impls::next_u32_via_fill(self)
    }

    fn next_u64(&mut self) -> u64 {
        rand_core::impls::next_u64_via_fill(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        let _ = self.try_fill_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        if dest.len() > self.remaining {
            return Err(rand_core::Error::new("entropy budget exhausted"));
        }
        self.remaining -= dest.len();
        dest.fill(0xA5);
        Ok(())
    }
}

impl CryptoRng for ShortRng {}
