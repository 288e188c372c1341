//! The nonce search loop.
//!
//! Mining starts at nonce 0 and walks upward, recomputing the block hash at
//! each step, until the hash meets the difficulty target — or, under the
//! capped policy, until the iteration budget runs out. A capped run that
//! stops short still returns a hash-consistent result; the shortfall is
//! reported in [`MineOutcome::met_target`], never swallowed.

use ballot_types::{BlockHash, Difficulty, MiningPolicy};

use crate::validator::{validate_work, work_hash};

/// The result of a mining run.
#[derive(Clone, Copy, Debug)]
pub struct MineOutcome {
    /// The nonce the search stopped at.
    pub nonce: u64,
    /// The block hash for that nonce.
    pub hash: BlockHash,
    /// Number of nonce increments performed.
    pub iterations: u64,
    /// Whether the hash actually meets the difficulty target. Always true
    /// under [`MiningPolicy::Uncapped`]; false when a capped run exhausted
    /// its budget first.
    pub met_target: bool,
}

/// Single-threaded nonce searcher.
///
/// The search is sequential by construction: the nonce stored in a block is
/// the smallest one satisfying the target (uncapped), which keeps mining a
/// pure, deterministic function of the block material and the difficulty.
#[derive(Clone, Copy, Debug)]
pub struct Miner {
    policy: MiningPolicy,
}

impl Miner {
    pub fn new(policy: MiningPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> MiningPolicy {
        self.policy
    }

    /// Search for a nonce whose work hash meets `difficulty`.
    ///
    /// `prefix` is the block's canonical hash material without the nonce.
    pub fn mine(&self, prefix: &[u8], difficulty: Difficulty) -> MineOutcome {
        let mut nonce = 0u64;
        let mut hash = work_hash(prefix, nonce);
        let mut iterations = 0u64;

        loop {
            if validate_work(&hash, difficulty) {
                return MineOutcome {
                    nonce,
                    hash,
                    iterations,
                    met_target: true,
                };
            }
            if let MiningPolicy::Capped { max_iterations } = self.policy {
                if iterations >= max_iterations {
                    return MineOutcome {
                        nonce,
                        hash,
                        iterations,
                        met_target: false,
                    };
                }
            }
            nonce = nonce.wrapping_add(1);
            hash = work_hash(prefix, nonce);
            iterations += 1;
        }
    }
}

impl Default for Miner {
    fn default() -> Self {
        Self::new(MiningPolicy::Uncapped)
    }
}
