//! Content hashing for templates and cadence.

use sha3::{Digest, Sha3_256};

/// SHA3-256 of `text`, hex encoded (64 lowercase characters).
pub fn gen_hash(text: &str) -> String {
    let mut hasher = Sha3_256::new();
    hasher.update(text.as_bytes());
    hex::encode(hasher.finalize())
}
