//! Axum-based JSON server.

use std::sync::Arc;

use axum::routing::{get, post, put};
use axum::Router;

use ballot_node::BallotNode;

use crate::error::RpcError;
use crate::handlers;

pub struct RpcServer {
    port: u16,
}

impl RpcServer {
    pub fn new(port: u16) -> Self {
        Self { port }
    }

    /// Build the route table over a shared node handle.
    pub fn router(node: Arc<BallotNode>) -> Router {
        Router::new()
            .route("/vote", post(handlers::submit_vote))
            .route("/chain", get(handlers::get_chain))
            .route("/verify", get(handlers::verify_chain))
            .route("/results", get(handlers::get_results))
            .route(
                "/candidates",
                get(handlers::get_candidates)
                    .post(handlers::add_candidate)
                    .put(handlers::modify_candidate),
            )
            .route("/admin/difficulty", put(handlers::set_difficulty))
            .route("/admin/status", get(handlers::get_status))
            .with_state(node)
    }

    /// Bind and serve until the process exits.
    pub async fn start(&self, node: Arc<BallotNode>) -> Result<(), RpcError> {
        let app = Self::router(node);
        let listener = tokio::net::TcpListener::bind(("0.0.0.0", self.port))
            .await
            .map_err(|e| RpcError::Server(format!("bind failed: {e}")))?;
        tracing::info!(port = self.port, "rpc server listening");
        axum::serve(listener, app)
            .await
            .map_err(|e| RpcError::Server(e.to_string()))
    }
}
