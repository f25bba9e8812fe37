//! Money moving in or out of an account.

mod db;
mod domain;
mod endpoints;

pub use db::{
    create_transaction, get_all_transactions, get_transaction, get_transactions_for_account,
};
pub use domain::{NewTransaction, Transaction, TransactionId};
pub use endpoints::{
    create_transaction_endpoint, get_transaction_endpoint, get_transaction_splits_endpoint,
    list_transactions_endpoint,
};
