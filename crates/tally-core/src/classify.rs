//! Net amount classification.
//!
//! Folds a transaction's resolved input amounts and its own outputs into a
//! single ledger record: send, receive, and fee figures in SPR plus a
//! formatted UTC timestamp. Classification is pure — it reads only the
//! cache, never the network.

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::OffsetDateTime;

use crate::cache::TxCache;
use crate::types::{sompi_to_spr, ClassifiedRecord, Transaction, TxInput};

/// Marker emitted when a transaction has no usable block time.
pub const INVALID_TIMESTAMP: &str = "Invalid Timestamp";

const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

/// Resolve the sompi amount an input contributed, in order of preference:
/// the funding output located in the cache, the inline amount hint the
/// indexer embedded on the input, else zero (terminal reference).
fn resolve_input_amount(input: &TxInput, cache: &TxCache) -> u64 {
    if let Some(funding) = cache.get(&input.previous_outpoint.txid) {
        if let Some(output) = funding.output_at(input.previous_outpoint.index) {
            return output.amount;
        }
    }
    input.previous_outpoint_amount.unwrap_or(0)
}

/// Classify a single transaction into a ledger record using only cache
/// lookups.
///
/// When `input_total > output_total` the transaction is outgoing: the
/// positive difference is booked as the fee, and the send figure is the
/// remainder after change and fee are netted out. When `output_total >
/// input_total` the difference is booked as received. Equal totals produce
/// an all-zero record, which is still emitted. At most one of send/receive
/// is non-zero.
#[must_use]
pub fn classify(tx: &Transaction, cache: &TxCache) -> ClassifiedRecord {
    let input_total: u64 = tx
        .inputs
        .iter()
        .map(|input| resolve_input_amount(input, cache))
        .sum();
    let output_total: u64 = tx.outputs.iter().map(|output| output.amount).sum();

    let fee_raw = input_total.saturating_sub(output_total);

    let (send_sompi, receive_sompi) = if input_total > output_total {
        // Net spend after change and fee; zero whenever the fee accounts
        // for the entire input/output difference.
        ((input_total - output_total) - fee_raw, 0)
    } else if output_total > input_total {
        (0, output_total - input_total)
    } else {
        (0, 0)
    };

    ClassifiedRecord {
        timestamp: format_block_time(tx.block_time),
        tx_hash: tx.id.to_string(),
        send_amount: sompi_to_spr(send_sompi),
        receive_amount: sompi_to_spr(receive_sompi),
        fee_amount: sompi_to_spr(fee_raw),
    }
}

/// Render an epoch-millisecond block time as a UTC `YYYY-MM-DD HH:MM:SS`
/// string. Null and non-positive values render as [`INVALID_TIMESTAMP`];
/// the record is still emitted.
#[must_use]
pub fn format_block_time(block_time: Option<i64>) -> String {
    let Some(millis) = block_time.filter(|t| *t > 0) else {
        return INVALID_TIMESTAMP.to_owned();
    };

    OffsetDateTime::from_unix_timestamp(millis / 1000)
        .ok()
        .and_then(|dt| dt.format(&TIMESTAMP_FORMAT).ok())
        .unwrap_or_else(|| INVALID_TIMESTAMP.to_owned())
}
