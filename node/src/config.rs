//! Node configuration with TOML file support.

use serde::{Deserialize, Serialize};

use ballot_types::{Difficulty, LedgerParams, MiningPolicy};

use crate::error::NodeError;

/// Configuration for a ballotchain node.
///
/// Can be loaded from a TOML file via [`NodeConfig::from_toml_file`] or
/// built programmatically (e.g. for tests). Every field has a default, so a
/// partial file — or none at all — works.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NodeConfig {
    /// Proof-of-work difficulty applied to appended blocks (1..=5).
    #[serde(default = "default_difficulty")]
    pub difficulty: u32,

    /// Candidate roster the election starts with.
    #[serde(default = "default_candidates")]
    pub candidates: Vec<String>,

    /// Port the JSON API listens on.
    #[serde(default = "default_rpc_port")]
    pub rpc_port: u16,

    /// Log format: "human" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Mining termination policy. Kept last so the nested `[mining]` table
    /// serializes after the scalar keys.
    #[serde(default)]
    pub mining: MiningPolicy,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_difficulty() -> u32 {
    Difficulty::MIN.get()
}

fn default_candidates() -> Vec<String> {
    LedgerParams::voting_defaults().candidates
}

fn default_rpc_port() -> u16 {
    5000
}

fn default_log_format() -> String {
    "human".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl NodeConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &str) -> Result<Self, NodeError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| NodeError::Config(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, NodeError> {
        toml::from_str(s).map_err(|e| NodeError::Config(e.to_string()))
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> String {
        toml::to_string_pretty(self).expect("NodeConfig is always serializable to TOML")
    }

    /// Validate and convert into the ledger's startup parameters.
    pub fn ledger_params(&self) -> Result<LedgerParams, NodeError> {
        let difficulty = Difficulty::try_new(self.difficulty)?;
        Ok(LedgerParams {
            difficulty,
            mining_policy: self.mining,
            candidates: self.candidates.clone(),
        })
    }
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            difficulty: default_difficulty(),
            candidates: default_candidates(),
            rpc_port: default_rpc_port(),
            log_format: default_log_format(),
            log_level: default_log_level(),
            mining: MiningPolicy::default(),
        }
    }
}
