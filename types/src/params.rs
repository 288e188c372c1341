//! Ledger parameters — the tunable values of the vote chain.
//!
//! Everything here is operator-configurable; the rest of the engine treats
//! these as fixed inputs.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Iteration budget used by the capped mining lineage.
pub const DEFAULT_MINING_ITERATION_CAP: u64 = 1_000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DifficultyError {
    #[error("difficulty {0} outside supported range {min}..={max}", min = Difficulty::MIN.get(), max = Difficulty::MAX.get())]
    OutOfRange(u32),
}

/// Proof-of-work difficulty: the number of leading zero hex digits a mined
/// block hash must carry.
///
/// Valid operating range is 1..=5. Above 5 the uncapped mining loop takes
/// impractically long for a single process; 0 would disable admission
/// control entirely.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Difficulty(u32);

impl Difficulty {
    pub const MIN: Self = Self(1);
    pub const MAX: Self = Self(5);

    /// Validate a raw difficulty value.
    pub fn try_new(value: u32) -> Result<Self, DifficultyError> {
        if (Self::MIN.0..=Self::MAX.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(DifficultyError::OutOfRange(value))
        }
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::MIN
    }
}

impl TryFrom<u32> for Difficulty {
    type Error = DifficultyError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Difficulty> for u32 {
    fn from(d: Difficulty) -> u32 {
        d.0
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How the mining loop terminates.
///
/// The two lineages of this design disagree: one mines until the target is
/// met, the other gives up after a fixed iteration budget and accepts the
/// partial result. Both are supported; which one runs is an explicit
/// configuration choice, and a capped run that stops short is reported as
/// such rather than silently accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum MiningPolicy {
    /// Iterate until the hash meets the difficulty target.
    Uncapped,
    /// Stop after `max_iterations` attempts and accept the best-effort hash.
    Capped { max_iterations: u64 },
}

impl MiningPolicy {
    /// The capped lineage with its historical budget of 1000 iterations.
    pub fn capped_default() -> Self {
        Self::Capped {
            max_iterations: DEFAULT_MINING_ITERATION_CAP,
        }
    }
}

impl Default for MiningPolicy {
    fn default() -> Self {
        Self::Uncapped
    }
}

/// Parameters the ledger is created with.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LedgerParams {
    /// Proof-of-work difficulty applied to every appended block.
    pub difficulty: Difficulty,

    /// Mining termination policy.
    pub mining_policy: MiningPolicy,

    /// Candidate roster the election starts with.
    pub candidates: Vec<String>,
}

impl LedgerParams {
    /// The default single-node election setup.
    pub fn voting_defaults() -> Self {
        Self {
            difficulty: Difficulty::MIN,
            mining_policy: MiningPolicy::Uncapped,
            candidates: vec![
                "Candidate A".to_string(),
                "Candidate B".to_string(),
                "Candidate C".to_string(),
            ],
        }
    }
}

impl Default for LedgerParams {
    fn default() -> Self {
        Self::voting_defaults()
    }
}
