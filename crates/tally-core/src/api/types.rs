//! Wire-format types for the Spectre indexer REST API.
//!
//! These mirror the JSON the indexer actually emits, with every optional
//! field made explicit; conversion into the domain types in
//! [`crate::types`] is total and never fails.

use serde::Deserialize;

use crate::types::{Outpoint, Transaction, TxId, TxInput, TxOutput};

/// `GET /addresses/{address}/transactions-count` response body.
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionCount {
    #[serde(default)]
    pub total: u64,
}

/// A full transaction object as returned by the address-history and search
/// endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTransaction {
    pub transaction_id: String,
    /// Epoch milliseconds; absent or null when the indexer has no block
    /// time for the transaction.
    pub block_time: Option<i64>,
    #[serde(default)]
    pub is_accepted: bool,
    /// The indexer emits `null` instead of an empty array for coinbase
    /// transactions.
    #[serde(default, deserialize_with = "null_to_empty")]
    pub inputs: Vec<RawInput>,
    #[serde(default, deserialize_with = "null_to_empty")]
    pub outputs: Vec<RawOutput>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawInput {
    pub previous_outpoint_hash: String,
    pub previous_outpoint_index: u32,
    /// Inline sompi amount of the spent output, when the indexer chose to
    /// embed it.
    #[serde(default)]
    pub previous_outpoint_amount: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawOutput {
    pub index: u32,
    pub amount: u64,
}

fn null_to_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    let value: Option<Vec<T>> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

// ==============================================================================
// Domain Conversion
// ==============================================================================

impl From<RawTransaction> for Transaction {
    fn from(raw: RawTransaction) -> Self {
        Transaction {
            id: TxId::from(raw.transaction_id),
            block_time: raw.block_time,
            accepted: raw.is_accepted,
            inputs: raw.inputs.into_iter().map(TxInput::from).collect(),
            outputs: raw.outputs.into_iter().map(TxOutput::from).collect(),
        }
    }
}

impl From<RawInput> for TxInput {
    fn from(raw: RawInput) -> Self {
        TxInput {
            previous_outpoint: Outpoint::new(
                TxId::from(raw.previous_outpoint_hash),
                raw.previous_outpoint_index,
            ),
            previous_outpoint_amount: raw.previous_outpoint_amount,
        }
    }
}

impl From<RawOutput> for TxOutput {
    fn from(raw: RawOutput) -> Self {
        TxOutput {
            index: raw.index,
            amount: raw.amount,
        }
    }
}
