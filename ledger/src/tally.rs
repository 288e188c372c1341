//! Vote counting — derived entirely from the chain.
//!
//! The tally is a pure scan over vote blocks. A name that was renamed away
//! or never added to the roster still counts under its literal spelling:
//! the chain, not the roster, is the source of truth.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::block::Block;

/// Count votes per candidate name across the chain.
pub fn tally_votes(blocks: &[Block]) -> BTreeMap<String, u64> {
    let mut counts = BTreeMap::new();
    for block in blocks.iter().filter(|b| !b.is_genesis()) {
        if let Some(record) = block.vote() {
            *counts.entry(record.candidate.clone()).or_insert(0) += 1;
        }
    }
    counts
}

/// One row of the standings.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CandidateStanding {
    pub candidate: String,
    pub votes: u64,
    /// Share of the total vote, rounded to one decimal place. 0 when no
    /// votes have been cast.
    pub percentage: f64,
}

/// Roster-aware election standings.
#[derive(Clone, Debug, Serialize)]
pub struct ElectionResults {
    pub total_votes: u64,
    /// Candidate currently leading; `None` until at least one vote exists.
    /// Ties go to the earlier roster position.
    pub winner: Option<String>,
    pub standings: Vec<CandidateStanding>,
}

/// Compute standings: every roster candidate appears (zero-seeded, roster
/// order), followed by any off-roster names found on-chain in sorted order.
pub fn election_results(blocks: &[Block], roster: &[String]) -> ElectionResults {
    let mut counts = tally_votes(blocks);
    let total_votes: u64 = counts.values().sum();

    let mut standings = Vec::with_capacity(roster.len());
    for candidate in roster {
        let votes = counts.remove(candidate).unwrap_or(0);
        standings.push(make_standing(candidate.clone(), votes, total_votes));
    }
    // Whatever is left in the tally refers to names outside the roster.
    for (candidate, votes) in counts {
        standings.push(make_standing(candidate, votes, total_votes));
    }

    // First strictly-greater count wins, so ties resolve to the earlier
    // roster position.
    let mut winner: Option<&CandidateStanding> = None;
    for standing in standings.iter().filter(|s| s.votes > 0) {
        if winner.map_or(true, |w| standing.votes > w.votes) {
            winner = Some(standing);
        }
    }
    let winner = winner.map(|s| s.candidate.clone());

    ElectionResults {
        total_votes,
        winner,
        standings,
    }
}

fn make_standing(candidate: String, votes: u64, total: u64) -> CandidateStanding {
    let percentage = if total == 0 {
        0.0
    } else {
        (votes as f64 / total as f64 * 1000.0).round() / 10.0
    };
    CandidateStanding {
        candidate,
        votes,
        percentage,
    }
}
