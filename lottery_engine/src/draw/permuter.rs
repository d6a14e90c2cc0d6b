//! Sequence permuters used to freeze the draw order.
//!
//! Both permuters run the same Fisher–Yates walk: for `i` from the last
//! index down to 1, swap `items[i]` with `items[j]` where `j` is drawn
//! uniformly from `0..=i`. `j` comes from rejection sampling over 64-bit
//! generator outputs, so no index is favoured.
//!
//! The seeded permuter keys ChaCha20 with `SHA-256(seed)`. Identical seed and
//! identical input order give the identical permutation on every platform.

use rand::rngs::ThreadRng;
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use sha2::{Digest, Sha256};

/// Capability to permute a slice in place.
pub trait Permuter {
    fn permute<T>(&mut self, items: &mut [T]);
}

/// Deterministic permuter keyed by an arbitrary string.
pub struct SeededPermuter {
    rng: ChaCha20Rng,
}

impl SeededPermuter {
    pub fn new(seed: &str) -> Self {
        let key: [u8; 32] = Sha256::digest(seed.as_bytes()).into();
        Self {
            rng: ChaCha20Rng::from_seed(key),
        }
    }
}

impl Permuter for SeededPermuter {
    fn permute<T>(&mut self, items: &mut [T]) {
        fisher_yates(&mut self.rng, items);
    }
}

/// Unpredictable permuter backed by a cryptographically secure generator.
pub struct SecurePermuter<R = ThreadRng> {
    rng: R,
}

impl SecurePermuter<ThreadRng> {
    /// Create a permuter using the thread-local CSPRNG seeded from the OS.
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for SecurePermuter<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore + CryptoRng> SecurePermuter<R> {
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: RngCore + CryptoRng> Permuter for SecurePermuter<R> {
    fn permute<T>(&mut self, items: &mut [T]) {
        fisher_yates(&mut self.rng, items);
    }
}

fn fisher_yates<R: RngCore, T>(rng: &mut R, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = uniform_below(rng, i as u64 + 1) as usize;
        items.swap(i, j);
    }
}

/// Uniform value in `0..bound`. `bound` must be non-zero.
fn uniform_below<R: RngCore>(rng: &mut R, bound: u64) -> u64 {
    // Outputs below `threshold` would bias the low residues.
    let threshold = bound.wrapping_neg() % bound;
    loop {
        let value = rng.next_u64();
        if value >= threshold {
            return value % bound;
        }
    }
}
