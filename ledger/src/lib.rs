//! Append-only hash-linked vote ledger.
//!
//! Every vote and every roster change is recorded as a proof-of-work-mined
//! block referencing the hash of the block before it, so the chain itself is
//! the audit log. The engine is a single in-process instance: no peers, no
//! persistence, no fork choice — one linear chain for the process lifetime.

pub mod block;
pub mod engine;
pub mod error;
pub mod genesis;
pub mod tally;

pub use block::{AdminAction, Block, BlockPayload, DraftBlock, MiningReport, VoteRecord};
pub use engine::{chain_is_valid, AppendOutcome, LedgerSummary, VotingLedger};
pub use error::LedgerError;
pub use genesis::genesis_block;
pub use tally::{election_results, tally_votes, CandidateStanding, ElectionResults};
