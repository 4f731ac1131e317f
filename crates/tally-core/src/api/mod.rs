//! Spectre indexer REST API abstraction layer.
//!
//! Defines the [`SpectreApi`] trait and provides an HTTP implementation
//! ([`HttpApiClient`]) plus a test mock (`mock::MockApi`).

mod http_client;
#[cfg(test)]
pub mod mock;
pub mod types;

pub use http_client::HttpApiClient;

use async_trait::async_trait;

use crate::error::CoreError;
use crate::types::{Address, Transaction, TxId};

/// Minimal trait covering the indexer endpoints that Tally needs.
///
/// Implementations are expected to handle transport, status checking, and
/// response deserialization internally. All three operations are idempotent
/// reads.
#[async_trait]
pub trait SpectreApi: Send + Sync {
    /// Total number of transactions the indexer knows for an address.
    async fn transaction_count(&self, address: &Address) -> Result<u64, CoreError>;

    /// One page of full transaction objects for an address.
    async fn transactions_page(
        &self,
        address: &Address,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Transaction>, CoreError>;

    /// Batched lookup of full transaction objects by id. Ids the indexer
    /// cannot resolve are simply absent from the result; that is not an
    /// error.
    async fn transactions_by_ids(&self, ids: &[TxId]) -> Result<Vec<Transaction>, CoreError>;
}
