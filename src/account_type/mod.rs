//! Kinds of account, e.g. savings or investment.

mod db;
mod domain;
mod endpoints;

pub use db::{create_account_type, get_account_type, get_all_account_types};
pub use domain::{AccountType, AccountTypeId, NewAccountType};
pub use endpoints::{
    create_account_type_endpoint, get_account_type_endpoint, list_account_types_endpoint,
};
