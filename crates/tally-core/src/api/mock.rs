use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::CoreError;
use crate::types::{Address, Transaction, TxId};

use super::SpectreApi;

/// A mock indexer backend for testing. Serves canned transactions from
/// per-address lists and an id map populated via the builder pattern, and
/// records every page and search request so tests can assert pagination
/// windows and batch contents.
pub struct MockApi {
    address_txs: HashMap<Address, Vec<Transaction>>,
    transactions: HashMap<TxId, Transaction>,
    page_requests: Mutex<Vec<PageRequest>>,
    search_batches: Mutex<Vec<Vec<TxId>>>,
}

/// One recorded call to the address-history endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub address: Address,
    pub offset: u64,
    pub limit: u64,
}

impl MockApi {
    pub fn builder() -> MockApiBuilder {
        MockApiBuilder {
            address_txs: HashMap::new(),
            transactions: HashMap::new(),
        }
    }

    pub fn page_requests(&self) -> Vec<PageRequest> {
        self.page_requests.lock().expect("mock lock").clone()
    }

    pub fn search_batches(&self) -> Vec<Vec<TxId>> {
        self.search_batches.lock().expect("mock lock").clone()
    }
}

pub struct MockApiBuilder {
    address_txs: HashMap<Address, Vec<Transaction>>,
    transactions: HashMap<TxId, Transaction>,
}

impl MockApiBuilder {
    /// Register a transaction as part of an address's history. The
    /// transaction is also indexed for search lookups.
    pub fn with_address_transaction(mut self, address: &Address, tx: Transaction) -> Self {
        self.transactions.insert(tx.id.clone(), tx.clone());
        self.address_txs
            .entry(address.clone())
            .or_default()
            .push(tx);
        self
    }

    /// Register a transaction for search lookups only — an ancestor no
    /// tracked address touches.
    pub fn with_transaction(mut self, tx: Transaction) -> Self {
        self.transactions.insert(tx.id.clone(), tx);
        self
    }

    pub fn build(self) -> MockApi {
        MockApi {
            address_txs: self.address_txs,
            transactions: self.transactions,
            page_requests: Mutex::new(Vec::new()),
            search_batches: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl SpectreApi for MockApi {
    async fn transaction_count(&self, address: &Address) -> Result<u64, CoreError> {
        Ok(self
            .address_txs
            .get(address)
            .map_or(0, |txs| txs.len() as u64))
    }

    async fn transactions_page(
        &self,
        address: &Address,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Transaction>, CoreError> {
        self.page_requests
            .lock()
            .expect("mock lock")
            .push(PageRequest {
                address: address.clone(),
                offset,
                limit,
            });

        let txs = self
            .address_txs
            .get(address)
            .map(Vec::as_slice)
            .unwrap_or(&[]);
        let start = (offset as usize).min(txs.len());
        let end = start.saturating_add(limit as usize).min(txs.len());
        Ok(txs[start..end].to_vec())
    }

    async fn transactions_by_ids(&self, ids: &[TxId]) -> Result<Vec<Transaction>, CoreError> {
        self.search_batches
            .lock()
            .expect("mock lock")
            .push(ids.to_vec());

        // Unknown ids are silently absent, like the real search endpoint.
        Ok(ids
            .iter()
            .filter_map(|id| self.transactions.get(id).cloned())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{make_tx, output, txid};

    #[tokio::test]
    async fn pages_slice_the_address_history() {
        let address = Address::from("spectre:qqtest");
        let mut builder = MockApi::builder();
        for n in 0..3 {
            builder = builder.with_address_transaction(
                &address,
                make_tx(txid(n), Some(i64::from(n)), Vec::new(), vec![output(0, 10)]),
            );
        }
        let api = builder.build();

        assert_eq!(api.transaction_count(&address).await.unwrap(), 3);

        let page = api.transactions_page(&address, 1, 2).await.unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(page[0].id, txid(1));

        let past_end = api.transactions_page(&address, 5, 2).await.unwrap();
        assert!(past_end.is_empty());
    }

    #[tokio::test]
    async fn search_skips_unknown_ids_and_records_batches() {
        let api = MockApi::builder()
            .with_transaction(make_tx(txid(1), None, Vec::new(), Vec::new()))
            .build();

        let found = api
            .transactions_by_ids(&[txid(1), txid(2)])
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, txid(1));

        assert_eq!(api.search_batches(), vec![vec![txid(1), txid(2)]]);
    }
}
