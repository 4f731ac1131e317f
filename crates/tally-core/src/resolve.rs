use std::collections::HashSet;

use tracing::{debug, info};

use crate::api::SpectreApi;
use crate::cache::TxCache;
use crate::error::CoreError;
use crate::types::{Transaction, TxId};

/// Fetch the referenced previous transactions that are not yet cached.
///
/// Referenced ids are collected in first-occurrence order and deduplicated,
/// so each missing ancestor appears in exactly one batch and batches are
/// deterministic for a given input set. Ids the indexer does not return
/// stay absent from the cache; the classifier treats them as terminal
/// references.
pub async fn resolve_missing(
    api: &dyn SpectreApi,
    cache: &mut TxCache,
    transactions: &[Transaction],
    batch_size: usize,
) -> Result<(), CoreError> {
    let mut seen: HashSet<&TxId> = HashSet::new();
    let mut missing: Vec<TxId> = Vec::new();
    for tx in transactions {
        for input in &tx.inputs {
            let prev = &input.previous_outpoint.txid;
            if !cache.contains(prev) && seen.insert(prev) {
                missing.push(prev.clone());
            }
        }
    }

    info!(missing = missing.len(), "resolving referenced transactions");

    for batch in missing.chunks(batch_size) {
        debug!(batch_len = batch.len(), "fetching transaction batch");
        let fetched = api.transactions_by_ids(batch).await?;
        for tx in fetched {
            cache.insert(tx);
        }
    }

    Ok(())
}
