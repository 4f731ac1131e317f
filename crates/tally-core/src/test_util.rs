//! Shared test helpers for `tally-core` unit tests.
//!
//! Consolidates builder functions for dummy transactions so tests across
//! modules share a single source of truth for test data construction.

use crate::types::{Outpoint, Transaction, TxId, TxInput, TxOutput};

/// Create a deterministic 64-hex-character transaction id from a single
/// distinguishing byte. Ids only need to be unique within a test.
pub fn txid(n: u8) -> TxId {
    TxId::from(format!("{n:064x}"))
}

/// Build an accepted transaction with the given id, block time, inputs,
/// and outputs. Override `accepted` after construction when needed.
pub fn make_tx(
    id: TxId,
    block_time: Option<i64>,
    inputs: Vec<TxInput>,
    outputs: Vec<TxOutput>,
) -> Transaction {
    Transaction {
        id,
        block_time,
        accepted: true,
        inputs,
        outputs,
    }
}

/// An input spending `funding:index`, with no inline amount hint.
pub fn spending_input(funding: TxId, index: u32) -> TxInput {
    TxInput {
        previous_outpoint: Outpoint::new(funding, index),
        previous_outpoint_amount: None,
    }
}

/// An input spending `funding:index` that carries an inline amount hint.
pub fn hinted_input(funding: TxId, index: u32, hint_sompi: u64) -> TxInput {
    TxInput {
        previous_outpoint: Outpoint::new(funding, index),
        previous_outpoint_amount: Some(hint_sompi),
    }
}

/// An output with the given reference index and sompi amount.
pub fn output(index: u32, amount_sompi: u64) -> TxOutput {
    TxOutput {
        index,
        amount: amount_sompi,
    }
}
