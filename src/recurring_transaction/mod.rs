//! Transactions that repeat on a schedule, e.g. wages or a phone bill.
//!
//! The schedule is stored for the client to use; nothing on the server
//! creates transactions from it.

mod db;
mod domain;
mod endpoints;

pub use db::{
    create_recurring_transaction, get_all_recurring_transactions,
    get_recurring_transaction, get_recurring_transactions_for_account,
};
pub use domain::{Frequency, NewRecurringTransaction, RecurringTransaction, RecurringTransactionId};
pub use endpoints::{
    create_recurring_transaction_endpoint, get_recurring_transaction_endpoint,
    list_recurring_transactions_endpoint,
};
