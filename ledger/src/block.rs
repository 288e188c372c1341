//! Block types — the unit of record of the vote chain.
//!
//! A block moves through exactly one transition: [`DraftBlock`] (constructed,
//! nonce 0, hash computed) → [`Block`] (mined, terminal). Blocks stored in
//! the chain are never mutated; making a tampered block hash-consistent
//! again requires re-mining it.

use ballot_types::{BlockHash, Difficulty, Timestamp, VoterId};
use ballot_work::{work_hash, MineOutcome, Miner};
use serde::{Deserialize, Serialize};

/// A recorded vote.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteRecord {
    pub voter_id: VoterId,
    pub candidate: String,
    pub timestamp: Timestamp,
}

/// A roster change, recorded on-chain so the candidate list has an audit
/// trail.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AdminAction {
    AddCandidate {
        name: String,
    },
    ModifyCandidate {
        old_name: String,
        new_name: String,
    },
}

/// What a block records.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BlockPayload {
    /// The fixed first entry anchoring the chain.
    Genesis,
    /// One ballot.
    Vote(VoteRecord),
    /// One roster change.
    Admin(AdminAction),
}

/// Canonical hash material for a block, nonce excluded.
///
/// Field order is fixed (index, timestamp, payload, previous hash) and the
/// payload is serialized through serde_json, whose struct-field ordering is
/// declaration order — the same logical payload always produces the same
/// bytes. The miner appends the nonce to this prefix per attempt.
fn hash_material(
    index: u64,
    timestamp: Timestamp,
    payload: &BlockPayload,
    previous_hash: &BlockHash,
) -> Vec<u8> {
    let payload_bytes =
        serde_json::to_vec(payload).expect("block payload is always serializable");
    let mut buf =
        Vec::with_capacity(8 + 8 + payload_bytes.len() + previous_hash.as_bytes().len());
    buf.extend_from_slice(&index.to_be_bytes());
    buf.extend_from_slice(&timestamp.as_secs().to_be_bytes());
    buf.extend_from_slice(&payload_bytes);
    buf.extend_from_slice(previous_hash.as_bytes());
    buf
}

/// How a block's proof-of-work run went.
///
/// Returned alongside every appended block so a capped mining run that
/// stopped short of the target is visible to the caller instead of being
/// silently accepted.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct MiningReport {
    /// Difficulty in force when the block was mined.
    pub difficulty: Difficulty,
    /// Nonce increments performed.
    pub iterations: u64,
    /// False only when a capped run exhausted its budget below target.
    pub met_target: bool,
}

/// A block that has not been mined yet.
///
/// Constructed with nonce 0 and its hash computed immediately; consumed by
/// [`DraftBlock::mine`] (or [`DraftBlock::seal`] for genesis), so a draft
/// can never alias a block already visible to readers.
#[derive(Clone, Debug)]
pub struct DraftBlock {
    index: u64,
    timestamp: Timestamp,
    payload: BlockPayload,
    previous_hash: BlockHash,
    hash: BlockHash,
}

impl DraftBlock {
    pub fn new(
        index: u64,
        timestamp: Timestamp,
        payload: BlockPayload,
        previous_hash: BlockHash,
    ) -> Self {
        let hash = work_hash(&hash_material(index, timestamp, &payload, &previous_hash), 0);
        Self {
            index,
            timestamp,
            payload,
            previous_hash,
            hash,
        }
    }

    /// The construct-time hash (nonce 0).
    pub fn hash(&self) -> BlockHash {
        self.hash
    }

    /// Run the proof-of-work search and produce the terminal mined block.
    pub fn mine(self, miner: &Miner, difficulty: Difficulty) -> (Block, MiningReport) {
        let prefix = hash_material(self.index, self.timestamp, &self.payload, &self.previous_hash);
        let MineOutcome {
            nonce,
            hash,
            iterations,
            met_target,
        } = miner.mine(&prefix, difficulty);

        let block = Block {
            index: self.index,
            timestamp: self.timestamp,
            payload: self.payload,
            previous_hash: self.previous_hash,
            nonce,
            hash,
        };
        let report = MiningReport {
            difficulty,
            iterations,
            met_target,
        };
        (block, report)
    }

    /// Freeze the draft without mining.
    ///
    /// Only the genesis block takes this path: it anchors the chain and is
    /// exempt from proof-of-work.
    pub fn seal(self) -> Block {
        Block {
            index: self.index,
            timestamp: self.timestamp,
            payload: self.payload,
            previous_hash: self.previous_hash,
            nonce: 0,
            hash: self.hash,
        }
    }
}

/// A mined block in the chain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Position in the chain; 0 for genesis, strictly +1 thereafter.
    pub index: u64,

    /// Creation time. Recorded, not enforced monotone.
    pub timestamp: Timestamp,

    /// What this block records.
    pub payload: BlockPayload,

    /// Hash of the preceding block; [`BlockHash::ZERO`] for genesis.
    pub previous_hash: BlockHash,

    /// The proof-of-work nonce the mining search stopped at.
    pub nonce: u64,

    /// SHA-256 over (index, timestamp, payload, previous_hash, nonce).
    pub hash: BlockHash,
}

impl Block {
    /// Recompute this block's hash from its stored fields.
    ///
    /// Validation compares the result against the stored `hash`; any
    /// mismatch means a field was altered after mining.
    pub fn compute_hash(&self) -> BlockHash {
        work_hash(
            &hash_material(self.index, self.timestamp, &self.payload, &self.previous_hash),
            self.nonce,
        )
    }

    pub fn is_genesis(&self) -> bool {
        self.index == 0
    }

    /// The vote this block records, if it is a vote block.
    pub fn vote(&self) -> Option<&VoteRecord> {
        match &self.payload {
            BlockPayload::Vote(record) => Some(record),
            _ => None,
        }
    }
}
