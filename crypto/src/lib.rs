//! SHA-256 hashing for ballotchain blocks.

pub mod hash;

pub use hash::{hash_block_bytes, sha256, sha256_multi};
