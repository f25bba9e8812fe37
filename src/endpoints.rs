//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/accounts/{account_id}', use [format_endpoint].

/// The route to list or create account types.
pub const ACCOUNT_TYPES: &str = "/accountTypes";
/// The route to access a single account type.
pub const ACCOUNT_TYPE: &str = "/accountTypes/{account_type_id}";
/// The route to list or create accounts.
pub const ACCOUNTS: &str = "/accounts";
/// The route to access a single account.
pub const ACCOUNT: &str = "/accounts/{account_id}";
/// The route to list the transactions of an account.
pub const ACCOUNT_TRANSACTIONS: &str = "/accounts/{account_id}/transactions";
/// The route to list the recurring transactions of an account.
pub const ACCOUNT_RECURRING_TRANSACTIONS: &str = "/accounts/{account_id}/recurringTransactions";
/// The route to list or create recurring transactions.
pub const RECURRING_TRANSACTIONS: &str = "/recurringTransactions";
/// The route to access a single recurring transaction.
pub const RECURRING_TRANSACTION: &str = "/recurringTransactions/{recurring_transaction_id}";
/// The route to list or create transactions.
pub const TRANSACTIONS: &str = "/transactions";
/// The route to access a single transaction.
pub const TRANSACTION: &str = "/transactions/{transaction_id}";
/// The route to list the splits of a transaction.
pub const TRANSACTION_SPLITS_OF_TRANSACTION: &str = "/transactions/{transaction_id}/transactionSplits";
/// The route to list or create transaction splits.
pub const TRANSACTION_SPLITS: &str = "/transactionSplits";
/// The route to access a single transaction split.
pub const TRANSACTION_SPLIT: &str = "/transactionSplits/{transaction_split_id}";
/// The route to list or create transaction categories.
pub const TRANSACTION_CATEGORIES: &str = "/transactionCategories";
/// The route to access a single transaction category.
pub const TRANSACTION_CATEGORY: &str = "/transactionCategories/{transaction_category_id}";
/// The route to list or create transaction types.
pub const TRANSACTION_TYPES: &str = "/transactionTypes";
/// The route to access a single transaction type.
pub const TRANSACTION_TYPE: &str = "/transactionTypes/{transaction_type_id}";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/accounts/{account_id}', '{account_id}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let param_start = match endpoint_path.find('{') {
        Some(start) => start,
        None => return endpoint_path.to_string(),
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map_or(endpoint_path.len(), |end| param_start + end + 1);

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
