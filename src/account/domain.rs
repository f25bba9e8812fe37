use serde::{Deserialize, Serialize};

use crate::{DatabaseId, account_type::AccountTypeId};

/// The database ID of an [Account].
pub type AccountId = DatabaseId;

/// The amount of money available for a bank account or credit card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// The id for the account.
    pub id: AccountId,
    /// The name of the account.
    pub name: String,
    /// The balance, as last set by the client.
    ///
    /// This is never derived from the account's transactions.
    pub balance: f64,
    /// The kind of account.
    pub account_type_id: AccountTypeId,
}

/// The data needed to create an [Account].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewAccount {
    /// The name of the account.
    pub name: String,
    /// The starting balance.
    pub balance: f64,
    /// The kind of account.
    pub account_type_id: AccountTypeId,
}
