use tracing::{debug, info};

use crate::api::SpectreApi;
use crate::cache::TxCache;
use crate::error::CoreError;
use crate::types::{Address, Transaction};

/// Fetch every transaction touching `address`, page by page.
///
/// All fetched transactions are inserted into the cache unconditionally —
/// a non-accepted transaction can still fund a later one — while the
/// returned sequence contains only accepted transactions, in indexer
/// order. Offsets advance strictly by `page_size` until the reported count
/// is exhausted; a failed page request aborts the whole fetch.
pub async fn fetch_address_transactions(
    api: &dyn SpectreApi,
    cache: &mut TxCache,
    address: &Address,
    page_size: u64,
) -> Result<Vec<Transaction>, CoreError> {
    let total = api.transaction_count(address).await?;
    info!(%address, total, "fetching address transactions");

    let mut accepted = Vec::new();
    let mut offset = 0;
    while offset < total {
        debug!(%address, offset, limit = page_size, "fetching page");
        let page = api.transactions_page(address, offset, page_size).await?;
        for tx in page {
            if tx.accepted {
                accepted.push(tx.clone());
            }
            cache.insert(tx);
        }
        offset += page_size;
    }

    info!(%address, accepted = accepted.len(), "address fetch complete");
    Ok(accepted)
}
