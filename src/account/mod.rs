//! Bank accounts, credit cards and other places money is held.

mod db;
mod domain;
mod endpoints;

pub use db::{create_account, get_account, get_all_accounts};
pub use domain::{Account, AccountId, NewAccount};
pub use endpoints::{
    create_account_endpoint, get_account_endpoint, get_account_recurring_transactions_endpoint,
    get_account_transactions_endpoint, list_accounts_endpoint,
};
