pub mod api;
pub mod cache;
pub mod classify;
pub mod error;
pub mod fetch;
pub mod report;
pub mod resolve;
pub mod types;

#[cfg(test)]
mod test_util;

pub use error::CoreError;
pub use types::{Address, ClassifiedRecord, Transaction, TxId};
