//! The ledger engine — owns the chain and serializes every append.
//!
//! One `VotingLedger` instance exists per process, created at startup and
//! handed to whatever layer serves callers. All mutable state sits behind a
//! single mutex; the critical section spans the whole
//! check → mine → append → bookkeeping sequence, so two concurrent votes
//! from the same voter can never both pass the duplicate check, and no
//! append ever observes a half-updated tip. Reads take the same lock — the
//! simplest policy that is correct, and cheap at voting-system volumes.

use std::collections::{BTreeMap, HashSet};
use std::sync::{Mutex, MutexGuard};

use ballot_types::{Difficulty, LedgerParams, Timestamp, VoterId};
use ballot_work::Miner;
use serde::Serialize;

use crate::block::{AdminAction, Block, BlockPayload, DraftBlock, MiningReport, VoteRecord};
use crate::error::LedgerError;
use crate::genesis::genesis_block;
use crate::tally::{self, ElectionResults};

/// A successfully appended block together with its mining report.
#[derive(Clone, Debug)]
pub struct AppendOutcome {
    pub block: Block,
    pub report: MiningReport,
}

/// Point-in-time counters for operator views.
#[derive(Clone, Debug, Serialize)]
pub struct LedgerSummary {
    pub blocks: u64,
    pub votes: u64,
    pub candidates: u64,
    pub difficulty: u32,
    pub chain_valid: bool,
}

/// Everything the lock guards.
struct LedgerState {
    chain: Vec<Block>,
    difficulty: Difficulty,
    known_voters: HashSet<VoterId>,
    candidates: Vec<String>,
}

impl LedgerState {
    /// Build, mine and push the next block. Callers hold the lock.
    fn append_block(
        &mut self,
        payload: BlockPayload,
        miner: &Miner,
        timestamp: Timestamp,
    ) -> AppendOutcome {
        let tip_hash = self
            .chain
            .last()
            .expect("chain always contains the genesis block")
            .hash;
        let draft = DraftBlock::new(self.chain.len() as u64, timestamp, payload, tip_hash);
        let (block, report) = draft.mine(miner, self.difficulty);

        if report.met_target {
            tracing::info!(
                index = block.index,
                hash = %block.hash,
                iterations = report.iterations,
                "block mined"
            );
        } else {
            tracing::warn!(
                index = block.index,
                hash = %block.hash,
                iterations = report.iterations,
                difficulty = %report.difficulty,
                "mining budget exhausted, block accepted below target difficulty"
            );
        }

        self.chain.push(block.clone());
        AppendOutcome { block, report }
    }
}

/// The append-only vote ledger.
pub struct VotingLedger {
    miner: Miner,
    inner: Mutex<LedgerState>,
}

impl VotingLedger {
    /// Create a ledger with a genesis block stamped at the current time.
    pub fn new(params: LedgerParams) -> Self {
        Self::with_genesis_time(params, Timestamp::now())
    }

    /// Create a ledger with an explicit genesis timestamp (deterministic
    /// chains for tests).
    pub fn with_genesis_time(params: LedgerParams, genesis_at: Timestamp) -> Self {
        Self {
            miner: Miner::new(params.mining_policy),
            inner: Mutex::new(LedgerState {
                chain: vec![genesis_block(genesis_at)],
                difficulty: params.difficulty,
                known_voters: HashSet::new(),
                candidates: params.candidates,
            }),
        }
    }

    fn state(&self) -> MutexGuard<'_, LedgerState> {
        self.inner.lock().expect("ledger lock poisoned")
    }

    /// Record one vote.
    ///
    /// Rejects a voter ID that has voted before; otherwise mines a vote
    /// block onto the tip and remembers the voter. The whole sequence is one
    /// critical section.
    pub fn append_vote(
        &self,
        voter_id: VoterId,
        candidate: impl Into<String>,
    ) -> Result<AppendOutcome, LedgerError> {
        let candidate = candidate.into();
        let mut state = self.state();

        if state.known_voters.contains(&voter_id) {
            return Err(LedgerError::DuplicateVoter(voter_id));
        }

        let timestamp = Timestamp::now();
        let payload = BlockPayload::Vote(VoteRecord {
            voter_id: voter_id.clone(),
            candidate,
            timestamp,
        });
        let outcome = state.append_block(payload, &self.miner, timestamp);
        state.known_voters.insert(voter_id);
        Ok(outcome)
    }

    /// Add a candidate to the roster, recording the change on-chain.
    pub fn add_candidate(&self, name: impl Into<String>) -> Result<AppendOutcome, LedgerError> {
        let name = name.into();
        let mut state = self.state();

        if state.candidates.iter().any(|c| *c == name) {
            return Err(LedgerError::CandidateExists(name));
        }

        state.candidates.push(name.clone());
        let timestamp = Timestamp::now();
        let payload = BlockPayload::Admin(AdminAction::AddCandidate { name });
        Ok(state.append_block(payload, &self.miner, timestamp))
    }

    /// Rename a candidate in place, recording old and new names on-chain.
    ///
    /// The roster position is preserved and prior vote blocks are untouched:
    /// votes cast for the old name keep tallying under the old name, because
    /// the chain — not the roster — is the source of truth.
    pub fn modify_candidate(
        &self,
        old_name: &str,
        new_name: impl Into<String>,
    ) -> Result<AppendOutcome, LedgerError> {
        let new_name = new_name.into();
        let mut state = self.state();

        let position = state
            .candidates
            .iter()
            .position(|c| c == old_name)
            .ok_or_else(|| LedgerError::CandidateNotFound(old_name.to_string()))?;
        if state.candidates.iter().any(|c| *c == new_name) {
            return Err(LedgerError::CandidateExists(new_name));
        }

        state.candidates[position] = new_name.clone();
        let timestamp = Timestamp::now();
        let payload = BlockPayload::Admin(AdminAction::ModifyCandidate {
            old_name: old_name.to_string(),
            new_name,
        });
        Ok(state.append_block(payload, &self.miner, timestamp))
    }

    /// Change the proof-of-work difficulty for subsequent appends.
    pub fn set_difficulty(&self, value: u32) -> Result<Difficulty, LedgerError> {
        let difficulty = Difficulty::try_new(value)?;
        let mut state = self.state();
        state.difficulty = difficulty;
        tracing::info!(%difficulty, "mining difficulty updated");
        Ok(difficulty)
    }

    pub fn difficulty(&self) -> Difficulty {
        self.state().difficulty
    }

    /// Snapshot of the candidate roster, in roster order.
    pub fn candidates(&self) -> Vec<String> {
        self.state().candidates.clone()
    }

    /// Snapshot of the whole chain (read-only view).
    pub fn blocks(&self) -> Vec<Block> {
        self.state().chain.clone()
    }

    pub fn chain_len(&self) -> usize {
        self.state().chain.len()
    }

    /// Number of voters who have successfully voted.
    pub fn voter_count(&self) -> usize {
        self.state().known_voters.len()
    }

    /// Walk the chain and verify hash integrity and linkage.
    ///
    /// Reports only — an invalid chain is never repaired here.
    pub fn validate_chain(&self) -> bool {
        chain_is_valid(&self.state().chain)
    }

    /// Count votes per candidate by scanning the chain.
    ///
    /// Names no longer on the roster still count under their literal name.
    pub fn tally_votes(&self) -> BTreeMap<String, u64> {
        tally::tally_votes(&self.state().chain)
    }

    /// Roster-aware election standings: zero-seeded counts, percentages and
    /// the current winner.
    pub fn results(&self) -> ElectionResults {
        let state = self.state();
        tally::election_results(&state.chain, &state.candidates)
    }

    pub fn summary(&self) -> LedgerSummary {
        let state = self.state();
        LedgerSummary {
            blocks: state.chain.len() as u64,
            votes: state.known_voters.len() as u64,
            candidates: state.candidates.len() as u64,
            difficulty: state.difficulty.get(),
            chain_valid: chain_is_valid(&state.chain),
        }
    }
}

/// Verify an ordered block sequence: each block's stored hash must match a
/// recomputation from its own fields, and each `previous_hash` must equal
/// the predecessor's stored hash.
pub fn chain_is_valid(blocks: &[Block]) -> bool {
    for i in 1..blocks.len() {
        let current = &blocks[i];
        if current.hash != current.compute_hash() {
            return false;
        }
        if current.previous_hash != blocks[i - 1].hash {
            return false;
        }
    }
    true
}
