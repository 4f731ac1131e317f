//! Report assembly and CSV serialization.

use std::io::Write;

use tracing::info;

use crate::api::SpectreApi;
use crate::cache::TxCache;
use crate::classify::classify;
use crate::error::CoreError;
use crate::fetch::fetch_address_transactions;
use crate::resolve::resolve_missing;
use crate::types::{Address, ClassifiedRecord};

/// CSV column order, written explicitly so an empty report still carries
/// the schema.
const CSV_HEADER: [&str; 5] = [
    "timestamp",
    "txHash",
    "sendAmount",
    "receiveAmount",
    "feeAmount",
];

/// Assemble the full ledger for a set of addresses.
///
/// Fetches each address's accepted transactions in caller order, sorts the
/// combined set by block time (stable — ties keep concatenation order,
/// missing times sort first), resolves missing ancestors once over the
/// whole set, and classifies every transaction in sorted order. No
/// cross-address deduplication: a transaction touching two tracked
/// addresses appears once per address.
pub async fn build_report(
    api: &dyn SpectreApi,
    cache: &mut TxCache,
    addresses: &[Address],
    page_size: u64,
) -> Result<Vec<ClassifiedRecord>, CoreError> {
    if page_size == 0 {
        return Err(CoreError::InvalidConfig(
            "page size must be at least 1".to_owned(),
        ));
    }

    let mut working = Vec::new();
    for address in addresses {
        let txs = fetch_address_transactions(api, cache, address, page_size).await?;
        working.extend(txs);
    }
    info!(transactions = working.len(), "address fetches complete");

    working.sort_by_key(|tx| tx.block_time.unwrap_or(0));

    resolve_missing(api, cache, &working, page_size as usize).await?;

    Ok(working.iter().map(|tx| classify(tx, cache)).collect())
}

/// Write records as CSV: one header row, then one row per record. An
/// empty record set produces a header-only document.
pub fn write_csv<W: Write>(records: &[ClassifiedRecord], writer: W) -> Result<(), CoreError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer.write_record(CSV_HEADER)?;
    for record in records {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;
    Ok(())
}
