//! Sub-allocations of a transaction's amount across categories.
//!
//! The splits of a transaction are not required to add up to its amount.

mod db;
mod domain;
mod endpoints;

pub use db::{
    create_transaction_split, get_all_transaction_splits, get_splits_for_transaction,
    get_transaction_split,
};
pub use domain::{NewTransactionSplit, TransactionSplit, TransactionSplitId};
pub use endpoints::{
    create_transaction_split_endpoint, get_transaction_split_endpoint,
    list_transaction_splits_endpoint,
};
