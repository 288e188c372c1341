//! PoW validation.

use ballot_crypto::sha256_multi;
use ballot_types::{BlockHash, Difficulty};

/// Compute the work hash for a block: SHA-256 over the block's canonical
/// hash material with the nonce appended last (big-endian).
///
/// `prefix` is everything in the block that is fixed during mining —
/// index, timestamp, payload, previous hash — already canonically encoded.
pub fn work_hash(prefix: &[u8], nonce: u64) -> BlockHash {
    BlockHash::new(sha256_multi(&[prefix, &nonce.to_be_bytes()]))
}

/// Validate that a block hash meets the required difficulty.
pub fn validate_work(hash: &BlockHash, difficulty: Difficulty) -> bool {
    hash.leading_zero_hex_digits() >= difficulty.get()
}
