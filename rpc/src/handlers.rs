//! Request handlers and their JSON shapes.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use ballot_ledger::{AdminAction, Block, BlockPayload, ElectionResults, LedgerSummary};
use ballot_node::BallotNode;
use ballot_types::VoterId;

use crate::error::RpcError;

// ── Block views ──────────────────────────────────────────────────────────

/// Public rendering of a block payload. Voter IDs are masked — the chain is
/// public, ballots are not attributable from this view.
#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PayloadView {
    Genesis,
    Vote {
        voter_id: String,
        candidate: String,
        timestamp: u64,
    },
    Admin(AdminAction),
}

#[derive(Serialize)]
pub struct BlockView {
    pub index: u64,
    pub timestamp: u64,
    pub hash: String,
    pub previous_hash: String,
    pub nonce: u64,
    pub payload: PayloadView,
}

impl BlockView {
    pub fn from_block(block: &Block) -> Self {
        let payload = match &block.payload {
            BlockPayload::Genesis => PayloadView::Genesis,
            BlockPayload::Vote(record) => PayloadView::Vote {
                voter_id: record.voter_id.masked(),
                candidate: record.candidate.clone(),
                timestamp: record.timestamp.as_secs(),
            },
            BlockPayload::Admin(action) => PayloadView::Admin(action.clone()),
        };
        Self {
            index: block.index,
            timestamp: block.timestamp.as_secs(),
            hash: block.hash.to_string(),
            previous_hash: block.previous_hash.to_string(),
            nonce: block.nonce,
            payload,
        }
    }
}

// ── Vote ─────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct VoteRequest {
    pub voter_id: String,
    pub candidate: String,
}

#[derive(Serialize)]
pub struct VoteResponse {
    pub block: BlockView,
    /// False when a capped mining run stopped below the difficulty target.
    pub met_target: bool,
    pub iterations: u64,
}

pub async fn submit_vote(
    State(node): State<Arc<BallotNode>>,
    Json(req): Json<VoteRequest>,
) -> Result<Json<VoteResponse>, RpcError> {
    if req.voter_id.trim().is_empty() {
        return Err(RpcError::InvalidRequest("voter_id cannot be empty".into()));
    }
    if req.candidate.trim().is_empty() {
        return Err(RpcError::InvalidRequest("candidate cannot be empty".into()));
    }

    let outcome = node.append_vote(VoterId::new(req.voter_id), &req.candidate)?;
    Ok(Json(VoteResponse {
        block: BlockView::from_block(&outcome.block),
        met_target: outcome.report.met_target,
        iterations: outcome.report.iterations,
    }))
}

// ── Chain ────────────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct ChainResponse {
    pub length: usize,
    pub blocks: Vec<BlockView>,
}

pub async fn get_chain(State(node): State<Arc<BallotNode>>) -> Json<ChainResponse> {
    let blocks: Vec<BlockView> = node.blocks().iter().map(BlockView::from_block).collect();
    Json(ChainResponse {
        length: blocks.len(),
        blocks,
    })
}

#[derive(Serialize)]
pub struct VerifyResponse {
    pub valid: bool,
}

pub async fn verify_chain(State(node): State<Arc<BallotNode>>) -> Json<VerifyResponse> {
    Json(VerifyResponse {
        valid: node.validate_chain(),
    })
}

// ── Results ──────────────────────────────────────────────────────────────

pub async fn get_results(State(node): State<Arc<BallotNode>>) -> Json<ElectionResults> {
    Json(node.results())
}

// ── Roster ───────────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct CandidatesResponse {
    pub candidates: Vec<String>,
}

pub async fn get_candidates(State(node): State<Arc<BallotNode>>) -> Json<CandidatesResponse> {
    Json(CandidatesResponse {
        candidates: node.candidates(),
    })
}

#[derive(Deserialize)]
pub struct AddCandidateRequest {
    pub name: String,
}

#[derive(Serialize)]
pub struct RosterChangeResponse {
    pub block: BlockView,
    pub candidates: Vec<String>,
}

pub async fn add_candidate(
    State(node): State<Arc<BallotNode>>,
    Json(req): Json<AddCandidateRequest>,
) -> Result<Json<RosterChangeResponse>, RpcError> {
    let name = req.name.trim();
    if name.is_empty() {
        return Err(RpcError::InvalidRequest("candidate name cannot be empty".into()));
    }

    let outcome = node.add_candidate(name)?;
    Ok(Json(RosterChangeResponse {
        block: BlockView::from_block(&outcome.block),
        candidates: node.candidates(),
    }))
}

#[derive(Deserialize)]
pub struct ModifyCandidateRequest {
    pub old_name: String,
    pub new_name: String,
}

pub async fn modify_candidate(
    State(node): State<Arc<BallotNode>>,
    Json(req): Json<ModifyCandidateRequest>,
) -> Result<Json<RosterChangeResponse>, RpcError> {
    let new_name = req.new_name.trim();
    if new_name.is_empty() {
        return Err(RpcError::InvalidRequest("new candidate name cannot be empty".into()));
    }

    let outcome = node.modify_candidate(&req.old_name, new_name)?;
    Ok(Json(RosterChangeResponse {
        block: BlockView::from_block(&outcome.block),
        candidates: node.candidates(),
    }))
}

// ── Admin ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct SetDifficultyRequest {
    pub difficulty: u32,
}

#[derive(Serialize)]
pub struct SetDifficultyResponse {
    pub difficulty: u32,
}

pub async fn set_difficulty(
    State(node): State<Arc<BallotNode>>,
    Json(req): Json<SetDifficultyRequest>,
) -> Result<Json<SetDifficultyResponse>, RpcError> {
    let difficulty = node.set_difficulty(req.difficulty)?;
    Ok(Json(SetDifficultyResponse {
        difficulty: difficulty.get(),
    }))
}

pub async fn get_status(State(node): State<Arc<BallotNode>>) -> Json<LedgerSummary> {
    Json(node.summary())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ballot_node::NodeConfig;

    fn test_node() -> Arc<BallotNode> {
        Arc::new(BallotNode::new(NodeConfig::default()).unwrap())
    }

    #[tokio::test]
    async fn vote_succeeds_then_conflicts() {
        let node = test_node();

        let ok = submit_vote(
            State(Arc::clone(&node)),
            Json(VoteRequest {
                voter_id: "voter-001".into(),
                candidate: "Candidate A".into(),
            }),
        )
        .await
        .unwrap();
        assert_eq!(ok.0.block.index, 1);
        assert!(ok.0.met_target);

        let dup = submit_vote(
            State(Arc::clone(&node)),
            Json(VoteRequest {
                voter_id: "voter-001".into(),
                candidate: "Candidate B".into(),
            }),
        )
        .await;
        assert!(matches!(
            dup,
            Err(RpcError::Ledger(ballot_ledger::LedgerError::DuplicateVoter(_)))
        ));
    }

    #[tokio::test]
    async fn empty_fields_rejected_before_touching_the_ledger() {
        let node = test_node();

        let res = submit_vote(
            State(Arc::clone(&node)),
            Json(VoteRequest {
                voter_id: "  ".into(),
                candidate: "Candidate A".into(),
            }),
        )
        .await;
        assert!(matches!(res, Err(RpcError::InvalidRequest(_))));
        assert_eq!(node.blocks().len(), 1);
    }

    #[tokio::test]
    async fn chain_view_masks_voter_ids() {
        let node = test_node();
        node.append_vote(VoterId::new("voter-001"), "Candidate A").unwrap();

        let chain = get_chain(State(Arc::clone(&node))).await;

        assert_eq!(chain.0.length, 2);
        match &chain.0.blocks[1].payload {
            PayloadView::Vote { voter_id, .. } => {
                assert_eq!(voter_id, "vote*****");
                assert!(!voter_id.contains("001"));
            }
            other => panic!("expected vote payload, got {}", serde_json::to_string(other).unwrap()),
        }
    }

    #[tokio::test]
    async fn roster_endpoints_round_trip() {
        let node = test_node();

        let added = add_candidate(
            State(Arc::clone(&node)),
            Json(AddCandidateRequest {
                name: "Candidate D".into(),
            }),
        )
        .await
        .unwrap();
        assert!(added.0.candidates.contains(&"Candidate D".to_string()));

        let renamed = modify_candidate(
            State(Arc::clone(&node)),
            Json(ModifyCandidateRequest {
                old_name: "Candidate D".into(),
                new_name: "Party D".into(),
            }),
        )
        .await
        .unwrap();
        assert!(renamed.0.candidates.contains(&"Party D".to_string()));

        let missing = modify_candidate(
            State(Arc::clone(&node)),
            Json(ModifyCandidateRequest {
                old_name: "Nobody".into(),
                new_name: "Somebody".into(),
            }),
        )
        .await;
        assert!(matches!(
            missing,
            Err(RpcError::Ledger(ballot_ledger::LedgerError::CandidateNotFound(_)))
        ));
    }

    #[tokio::test]
    async fn difficulty_endpoint_validates_range() {
        let node = test_node();

        let ok = set_difficulty(
            State(Arc::clone(&node)),
            Json(SetDifficultyRequest { difficulty: 3 }),
        )
        .await
        .unwrap();
        assert_eq!(ok.0.difficulty, 3);

        let err = set_difficulty(
            State(Arc::clone(&node)),
            Json(SetDifficultyRequest { difficulty: 9 }),
        )
        .await;
        assert!(err.is_err());
    }

    #[tokio::test]
    async fn verify_and_status_report_a_healthy_chain() {
        let node = test_node();
        node.append_vote(VoterId::new("v1"), "Candidate A").unwrap();

        let verify = verify_chain(State(Arc::clone(&node))).await;
        assert!(verify.0.valid);

        let status = get_status(State(Arc::clone(&node))).await;
        assert_eq!(status.0.blocks, 2);
        assert_eq!(status.0.votes, 1);
        assert!(status.0.chain_valid);
    }

    #[tokio::test]
    async fn results_include_zero_seeded_roster() {
        let node = test_node();
        node.append_vote(VoterId::new("v1"), "Candidate A").unwrap();

        let results = get_results(State(node)).await;

        assert_eq!(results.0.total_votes, 1);
        assert_eq!(results.0.winner, Some("Candidate A".to_string()));
        assert_eq!(results.0.standings.len(), 3);
    }
}
