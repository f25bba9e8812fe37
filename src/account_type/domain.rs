use serde::{Deserialize, Serialize};

use crate::DatabaseId;

/// The database ID of an [AccountType].
pub type AccountTypeId = DatabaseId;

/// A kind of account, e.g. "Savings".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountType {
    /// The id for the account type.
    pub id: AccountTypeId,
    /// The display name, unique by convention only.
    pub name: String,
}

/// The data needed to create an [AccountType].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewAccountType {
    /// The display name.
    pub name: String,
}
