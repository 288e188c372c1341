//! Genesis block creation — the fixed first entry of the chain.
//!
//! The genesis block carries no vote, points at the all-zero hash, and is
//! exempt from proof-of-work. Its hash anchors every later block: alter it
//! and the whole chain fails validation.

use ballot_types::{BlockHash, Timestamp};

use crate::block::{Block, BlockPayload, DraftBlock};

/// Create the genesis block for a ledger started at `timestamp`.
pub fn genesis_block(timestamp: Timestamp) -> Block {
    DraftBlock::new(0, timestamp, BlockPayload::Genesis, BlockHash::ZERO).seal()
}
