//! Ballotchain node — owns the ledger for the process lifetime.
//!
//! The node is the layer the serving surface talks to: it loads
//! configuration, initializes logging, creates the one `VotingLedger`
//! instance at startup and exposes the ledger contract with tracing around
//! every operation. No hidden statics — whoever builds the node decides who
//! gets a handle.

pub mod config;
pub mod error;
pub mod logging;
pub mod node;

pub use config::NodeConfig;
pub use error::NodeError;
pub use logging::{init_logging, LogFormat};
pub use node::BallotNode;

// Re-exported so callers configuring a node do not need ballot-types directly.
pub use ballot_types::MiningPolicy;
