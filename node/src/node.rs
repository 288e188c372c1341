//! The node struct — creates the ledger at startup and hands out handles.

use std::collections::BTreeMap;
use std::sync::Arc;

use ballot_ledger::{
    AppendOutcome, Block, ElectionResults, LedgerError, LedgerSummary, VotingLedger,
};
use ballot_types::{Difficulty, VoterId};

use crate::config::NodeConfig;
use crate::error::NodeError;

/// A running ballotchain node.
///
/// Owns the single [`VotingLedger`] instance for the process. The serving
/// layer calls the ledger contract through this type, which adds tracing
/// around every operation.
pub struct BallotNode {
    config: NodeConfig,
    ledger: Arc<VotingLedger>,
}

impl BallotNode {
    /// Validate the configuration and create the ledger.
    pub fn new(config: NodeConfig) -> Result<Self, NodeError> {
        let params = config.ledger_params()?;
        tracing::info!(
            difficulty = %params.difficulty,
            mining_policy = ?params.mining_policy,
            candidates = params.candidates.len(),
            "starting ledger"
        );
        let ledger = Arc::new(VotingLedger::new(params));
        Ok(Self { config, ledger })
    }

    pub fn config(&self) -> &NodeConfig {
        &self.config
    }

    /// A shared handle to the ledger.
    pub fn ledger(&self) -> Arc<VotingLedger> {
        Arc::clone(&self.ledger)
    }

    /// Record a vote.
    pub fn append_vote(
        &self,
        voter_id: VoterId,
        candidate: &str,
    ) -> Result<AppendOutcome, LedgerError> {
        match self.ledger.append_vote(voter_id.clone(), candidate) {
            Ok(outcome) => {
                tracing::info!(
                    voter = %voter_id.masked(),
                    candidate,
                    index = outcome.block.index,
                    "vote recorded"
                );
                Ok(outcome)
            }
            Err(err) => {
                tracing::warn!(voter = %voter_id.masked(), %err, "vote rejected");
                Err(err)
            }
        }
    }

    /// Add a candidate to the roster.
    pub fn add_candidate(&self, name: &str) -> Result<AppendOutcome, LedgerError> {
        let outcome = self.ledger.add_candidate(name)?;
        tracing::info!(candidate = name, index = outcome.block.index, "candidate added");
        Ok(outcome)
    }

    /// Rename a candidate in place.
    pub fn modify_candidate(
        &self,
        old_name: &str,
        new_name: &str,
    ) -> Result<AppendOutcome, LedgerError> {
        let outcome = self.ledger.modify_candidate(old_name, new_name)?;
        tracing::info!(old_name, new_name, index = outcome.block.index, "candidate renamed");
        Ok(outcome)
    }

    /// Change the mining difficulty.
    pub fn set_difficulty(&self, value: u32) -> Result<Difficulty, LedgerError> {
        self.ledger.set_difficulty(value)
    }

    pub fn blocks(&self) -> Vec<Block> {
        self.ledger.blocks()
    }

    pub fn candidates(&self) -> Vec<String> {
        self.ledger.candidates()
    }

    pub fn validate_chain(&self) -> bool {
        self.ledger.validate_chain()
    }

    pub fn tally_votes(&self) -> BTreeMap<String, u64> {
        self.ledger.tally_votes()
    }

    pub fn results(&self) -> ElectionResults {
        self.ledger.results()
    }

    pub fn summary(&self) -> LedgerSummary {
        self.ledger.summary()
    }
}
