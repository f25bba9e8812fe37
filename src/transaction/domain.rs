use serde::{Deserialize, Serialize};
use time::Date;

use crate::{
    DatabaseId, account::AccountId, transaction_category::TransactionCategoryId,
    transaction_type::TransactionTypeId,
};

/// The database ID of a [Transaction].
pub type TransactionId = DatabaseId;

/// An expense, income or balance change recorded against an account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// The id for the transaction.
    pub id: TransactionId,
    /// When the transaction happened.
    pub date: Date,
    /// The amount of money, negative for money leaving the account.
    pub amount: f64,
    /// A free text description.
    pub description: String,
    /// The account the transaction belongs to.
    pub account_id: AccountId,
    /// The kind of transaction.
    pub transaction_type_id: TransactionTypeId,
    /// The category of the whole transaction, if any.
    pub transaction_category_id: Option<TransactionCategoryId>,
}

/// The data needed to create a [Transaction].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewTransaction {
    /// When the transaction happened.
    pub date: Date,
    /// The amount of money, negative for money leaving the account.
    pub amount: f64,
    /// A free text description, empty if omitted.
    #[serde(default)]
    pub description: String,
    /// The account the transaction belongs to.
    pub account_id: AccountId,
    /// The kind of transaction.
    pub transaction_type_id: TransactionTypeId,
    /// The category of the whole transaction, if any.
    #[serde(default)]
    pub transaction_category_id: Option<TransactionCategoryId>,
}
