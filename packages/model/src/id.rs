//! Block and page id generation.
//!
//! Ids are `<seed>-<counter>` where the seed is a CRC32 hash of the
//! scope string. Ids must be globally unique within a page collection;
//! an editing session salts its scope with the wall clock so counters
//! from different sessions never collide.

use crc32fast::Hasher;

/// Hash a scope string into a short stable seed.
pub fn scope_seed(scope: &str) -> String {
    let mut hasher = Hasher::new();
    hasher.update(scope.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Sequential id generator for tree nodes.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    seed: String,
    count: u32,
}

impl IdGenerator {
    pub fn new(scope: &str) -> Self {
        Self {
            seed: scope_seed(scope),
            count: 0,
        }
    }

    pub fn from_seed(seed: String) -> Self {
        Self { seed, count: 0 }
    }

    /// Generate the next sequential id.
    pub fn new_id(&mut self) -> String {
        self.count += 1;
        format!("{}-{}", self.seed, self.count)
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }
}
