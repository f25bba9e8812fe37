//! Kinds of transaction, e.g. an ordinary change or a balance correction.

mod db;
mod domain;
mod endpoints;

pub use db::{create_transaction_type, get_all_transaction_types, get_transaction_type};
pub use domain::{NewTransactionType, TransactionType, TransactionTypeId};
pub use endpoints::{
    create_transaction_type_endpoint, get_transaction_type_endpoint,
    list_transaction_types_endpoint,
};
