use serde::{Deserialize, Serialize};

use crate::DatabaseId;

/// The database ID of a [TransactionType].
pub type TransactionTypeId = DatabaseId;

/// A kind of transaction, e.g. "Change" or "BalanceUpdate".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionType {
    /// The id for the transaction type.
    pub id: TransactionTypeId,
    /// The display name.
    pub name: String,
}

/// The data needed to create a [TransactionType].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewTransactionType {
    /// The display name.
    pub name: String,
}
