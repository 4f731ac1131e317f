use std::collections::HashMap;

use crate::types::{Transaction, TxId};

// ==============================================================================
// Transaction Cache
// ==============================================================================

/// In-memory cache of every transaction seen during a run, keyed by id.
///
/// The cache is the single ownership point for [`Transaction`] values: the
/// fetcher and resolver insert into it, the classifier reads from it. It
/// grows monotonically, is never evicted, and lives for exactly one report
/// run. Execution is strictly sequential, so mutation goes through
/// `&mut self` with no interior locking.
#[derive(Debug, Default)]
pub struct TxCache {
    transactions: HashMap<TxId, Transaction>,
}

impl TxCache {
    pub fn new() -> Self {
        Self {
            transactions: HashMap::new(),
        }
    }

    /// Insert a transaction, keyed by its id. Re-inserting an id replaces
    /// the previous entry; fetches are idempotent, so the contents are
    /// assumed identical to prior writes.
    pub fn insert(&mut self, tx: Transaction) {
        self.transactions.insert(tx.id.clone(), tx);
    }

    pub fn get(&self, id: &TxId) -> Option<&Transaction> {
        self.transactions.get(id)
    }

    pub fn contains(&self, id: &TxId) -> bool {
        self.transactions.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}
