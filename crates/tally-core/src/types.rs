//! Domain types for Tally's transaction ledger model.
//!
//! Contains the id/address newtypes, the transaction types fetched from the
//! indexer (`Transaction`, `TxInput`, `TxOutput`, `Outpoint`), and the
//! classified record emitted into the report.

use serde::{Deserialize, Serialize};

// ==============================================================================
// Amount Unit
// ==============================================================================

/// Number of sompi in one SPR. All on-chain amounts are integer sompi;
/// only [`ClassifiedRecord`] carries display-unit values.
pub const SOMPI_PER_SPR: u64 = 100_000_000;

/// Convert an integer sompi amount to display-unit SPR.
#[must_use]
pub fn sompi_to_spr(sompi: u64) -> f64 {
    sompi as f64 / SOMPI_PER_SPR as f64
}

// ==============================================================================
// Identifier Newtypes
// ==============================================================================

/// A transaction id, wrapped for type safety.
///
/// The indexer exposes ids as opaque hex strings; no internal structure is
/// interpreted. `#[serde(transparent)]` preserves the JSON representation
/// as a bare string, so this newtype is wire-compatible with plain text.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TxId(pub String);

impl From<String> for TxId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for TxId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl std::fmt::Display for TxId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A Spectre address, treated as an opaque identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(pub String);

impl From<String> for Address {
    fn from(address: String) -> Self {
        Self(address)
    }
}

impl From<&str> for Address {
    fn from(address: &str) -> Self {
        Self(address.to_owned())
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

// ==============================================================================
// Transaction Types
// ==============================================================================

/// A reference to a specific output of a prior transaction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Outpoint {
    pub txid: TxId,
    pub index: u32,
}

impl Outpoint {
    pub fn new(txid: TxId, index: u32) -> Self {
        Self { txid, index }
    }
}

/// A transaction input. Inputs do not carry their own amount; the amount
/// lives on the output they spend.
#[derive(Debug, Clone, PartialEq)]
pub struct TxInput {
    /// The outpoint being spent.
    pub previous_outpoint: Outpoint,
    /// Inline sompi amount the indexer sometimes embeds on the input to
    /// spare a second lookup. A fallback hint, never the preferred source.
    pub previous_outpoint_amount: Option<u64>,
}

/// A transaction output. `index` is the position other transactions
/// reference this output by; it is carried explicitly rather than derived
/// from the output's slot in the sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct TxOutput {
    pub index: u32,
    /// Amount in sompi.
    pub amount: u64,
}

/// A transaction as seen by the ledger. Immutable once fetched.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: TxId,
    /// Block time in epoch milliseconds; `None` when the indexer has no
    /// usable timestamp.
    pub block_time: Option<i64>,
    /// Whether the indexer has accepted the transaction. Non-accepted
    /// transactions never appear in the report but can still fund inputs.
    pub accepted: bool,
    pub inputs: Vec<TxInput>,
    pub outputs: Vec<TxOutput>,
}

impl Transaction {
    /// The output other transactions reference as `index`, if any.
    #[must_use]
    pub fn output_at(&self, index: u32) -> Option<&TxOutput> {
        self.outputs.iter().find(|output| output.index == index)
    }
}

// ==============================================================================
// Classified Record
// ==============================================================================

/// One row of the final report: a transaction's net transfer figures in
/// SPR, with a formatted UTC timestamp. At most one of `send_amount` and
/// `receive_amount` is non-zero.
///
/// Serde names match the CSV columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifiedRecord {
    pub timestamp: String,
    #[serde(rename = "txHash")]
    pub tx_hash: String,
    #[serde(rename = "sendAmount")]
    pub send_amount: f64,
    #[serde(rename = "receiveAmount")]
    pub receive_amount: f64,
    #[serde(rename = "feeAmount")]
    pub fee_amount: f64,
}
