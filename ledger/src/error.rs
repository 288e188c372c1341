use ballot_types::{DifficultyError, VoterId};
use thiserror::Error;

/// Expected, caller-recoverable failures of the ledger operations.
///
/// None of these leave a partial state behind: a rejected operation appends
/// no block and mutates nothing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("voter {0} has already cast a vote")]
    DuplicateVoter(VoterId),

    #[error("candidate {0:?} already exists")]
    CandidateExists(String),

    #[error("candidate {0:?} not found")]
    CandidateNotFound(String),

    #[error(transparent)]
    InvalidDifficulty(#[from] DifficultyError),
}
