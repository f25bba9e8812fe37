use serde::{Deserialize, Serialize};

use crate::{
    DatabaseId, transaction::TransactionId, transaction_category::TransactionCategoryId,
};

/// The database ID of a [TransactionSplit].
pub type TransactionSplitId = DatabaseId;

/// Part of a transaction's amount assigned to a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionSplit {
    /// The id for the split.
    pub id: TransactionSplitId,
    /// The portion of the parent transaction's amount.
    pub amount: f64,
    /// The category this portion is assigned to.
    pub transaction_category_id: TransactionCategoryId,
    /// The parent transaction.
    pub transaction_id: TransactionId,
}

/// The data needed to create a [TransactionSplit].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewTransactionSplit {
    /// The portion of the parent transaction's amount.
    pub amount: f64,
    /// The category this portion is assigned to.
    pub transaction_category_id: TransactionCategoryId,
    /// The parent transaction.
    pub transaction_id: TransactionId,
}
