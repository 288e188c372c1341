//! JSON API for the ballotchain node.
//!
//! Exposes the ledger contract over HTTP:
//! - vote submission
//! - chain listing (voter IDs masked in the public view)
//! - chain verification
//! - election results
//! - roster management
//! - difficulty administration and status
//!
//! Pure JSON — rendering is the caller's problem.

pub mod error;
pub mod handlers;
pub mod server;

pub use error::RpcError;
pub use server::RpcServer;
