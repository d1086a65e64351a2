//! Forge broadcast log data model
//!
//! A broadcast log is the `run-latest.json` artifact that `forge script
//! --broadcast` writes under `broadcast/<script>/<chain-id>/`. Only the
//! fields needed for address extraction are modeled; everything else in the
//! artifact is ignored on deserialization.

use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

/// A deployment log produced by forge script.
///
/// The `transactions` field is required: an artifact without it is treated
/// as malformed rather than empty.
#[derive(Debug, Deserialize)]
pub struct BroadcastLog {
    pub transactions: Vec<BroadcastTransaction>,
}

/// A single recorded transaction from the broadcast log.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BroadcastTransaction {
    pub transaction_type: String,
    pub contract_name: Option<String>,
    pub contract_address: Option<String>,
}

impl BroadcastTransaction {
    /// Check if this transaction carries a usable contract name.
    ///
    /// Absent and empty names are treated the same way: the entry is
    /// skipped, not rejected.
    pub fn has_contract_name(&self) -> bool {
        self.contract_name.as_deref().is_some_and(|n| !n.is_empty())
    }

    /// Check if this transaction's type is one of `accepted`.
    pub fn is_creation(&self, accepted: &[&str]) -> bool {
        accepted.contains(&self.transaction_type.as_str())
    }
}

impl BroadcastLog {
    /// Load and parse a broadcast log from disk.
    ///
    /// A missing file and an unparseable file are distinct failures so the
    /// caller's diagnostic names the right problem.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::Artifact {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| Error::Malformed {
            path: path.to_path_buf(),
            source,
        })
    }
}
