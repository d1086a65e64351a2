//! Address extraction from a parsed broadcast log
//!
//! The whole pipeline is one stable filter-and-project pass: keep the
//! transactions that created a named contract, rename two fields, done.
//! No deduplication, no sorting, no address normalization.

use serde::Serialize;

use crate::broadcast::BroadcastLog;

/// A deployed contract's name and address, as printed to stdout.
///
/// The address is carried through verbatim from the log. It can be null
/// when the log recorded a creation without a resulting address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressRecord {
    pub address: Option<String>,
    pub contract_name: String,
}

/// Extract the address records for every accepted contract creation.
///
/// An entry is included iff it has a non-empty `contractName` and its
/// `transactionType` is one of `accepted`. Output order follows input
/// order.
pub fn extract_addresses(log: &BroadcastLog, accepted: &[&str]) -> Vec<AddressRecord> {
    log.transactions
        .iter()
        .filter(|tx| tx.has_contract_name() && tx.is_creation(accepted))
        .map(|tx| AddressRecord {
            address: tx.contract_address.clone(),
            // has_contract_name() guarantees the name is present
            contract_name: tx.contract_name.clone().unwrap_or_default(),
        })
        .collect()
}

/// Serialize address records as the compact JSON array printed to stdout.
pub fn to_json(records: &[AddressRecord]) -> crate::Result<String> {
    Ok(serde_json::to_string(records)?)
}
