use serde::{Deserialize, Serialize};

use crate::DatabaseId;

/// The database ID of a [TransactionCategory].
pub type TransactionCategoryId = DatabaseId;

/// A label for what money was spent on, e.g. "Groceries".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionCategory {
    /// The id for the category.
    pub id: TransactionCategoryId,
    /// The category name.
    pub name: String,
}

/// The data needed to create a [TransactionCategory].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewTransactionCategory {
    /// The category name.
    pub name: String,
}
