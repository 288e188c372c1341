//! RPC error types and their HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use ballot_ledger::LedgerError;

#[derive(Debug, Error)]
pub enum RpcError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error("server error: {0}")]
    Server(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl RpcError {
    fn status(&self) -> StatusCode {
        match self {
            RpcError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            RpcError::Ledger(LedgerError::DuplicateVoter(_)) => StatusCode::CONFLICT,
            RpcError::Ledger(LedgerError::CandidateExists(_)) => StatusCode::CONFLICT,
            RpcError::Ledger(LedgerError::CandidateNotFound(_)) => StatusCode::NOT_FOUND,
            RpcError::Ledger(LedgerError::InvalidDifficulty(_)) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            RpcError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RpcError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
