//! User defined categories for transactions and splits.

mod db;
mod domain;
mod endpoints;

pub use db::{create_transaction_category, get_all_transaction_categories, get_transaction_category};
pub use domain::{NewTransactionCategory, TransactionCategory, TransactionCategoryId};
pub use endpoints::{
    create_transaction_category_endpoint, get_transaction_category_endpoint,
    list_transaction_categories_endpoint,
};
