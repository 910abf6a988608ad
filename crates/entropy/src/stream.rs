//! Forkable ChaCha stream.

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaChaRng;
use sha2::{Digest, Sha256};

use crate::seed::Seed;

/// Domain tag mixed into every fork digest.
const FORK_DOMAIN: &[u8] = b"entropy/fork/v1";

/// A deterministic random stream.
///
/// Streams are seeded once from a [`Seed`] and then either drawn from
/// (`next_f64`, or any [`rand::Rng`] helper) or forked into labelled
/// children. Forking reads the parent's position but never advances it.
#[derive(Debug, Clone)]
pub struct Stream {
    rng: ChaChaRng,
    path: String,
}

impl Stream {
    /// Create the root stream for a seed.
    pub fn seeded(seed: impl Into<Seed>) -> Self {
        let seed = seed.into();
        Self {
            rng: ChaChaRng::seed_from_u64(seed.value()),
            path: "root".to_string(),
        }
    }

    /// Uniform float in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    /// Derive an independent child stream from this stream's current state
    /// and `label`.
    ///
    /// The same (state, label) pair always yields the same child; the parent
    /// is left untouched, so sibling forks can be taken in any order.
    ///
    /// # Example
    /// ```
    /// use entropy::Stream;
    ///
    /// let root = Stream::seeded(7_u64);
    /// let mut a = root.fork("comets");
    /// let mut b = root.fork("comets");
    /// assert_eq!(a.next_f64(), b.next_f64());
    /// ```
    pub fn fork(&self, label: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(FORK_DOMAIN);
        hasher.update(self.rng.get_seed());
        hasher.update(self.rng.get_stream().to_le_bytes());
        hasher.update(self.rng.get_word_pos().to_le_bytes());
        hasher.update((label.len() as u64).to_le_bytes());
        hasher.update(label.as_bytes());
        let digest = hasher.finalize();

        let mut child_seed = [0u8; 32];
        child_seed.copy_from_slice(&digest);

        Self {
            rng: ChaChaRng::from_seed(child_seed),
            path: format!("{}/{}", self.path, label),
        }
    }

    /// Label path from the root, e.g. `root/system/0/features/belts`.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Number of 32-bit words consumed so far.
    pub fn words_consumed(&self) -> u128 {
        self.rng.get_word_pos()
    }
}

impl RngCore for Stream {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        self.rng.fill_bytes(dst)
    }
}
