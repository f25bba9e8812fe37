//! Application router configuration.

use axum::{Router, http::StatusCode, routing::get};

use crate::{
    AppState,
    account::{
        create_account_endpoint, get_account_endpoint,
        get_account_recurring_transactions_endpoint, get_account_transactions_endpoint,
        list_accounts_endpoint,
    },
    account_type::{
        create_account_type_endpoint, get_account_type_endpoint, list_account_types_endpoint,
    },
    endpoints,
    recurring_transaction::{
        create_recurring_transaction_endpoint, get_recurring_transaction_endpoint,
        list_recurring_transactions_endpoint,
    },
    transaction::{
        create_transaction_endpoint, get_transaction_endpoint, get_transaction_splits_endpoint,
        list_transactions_endpoint,
    },
    transaction_category::{
        create_transaction_category_endpoint, get_transaction_category_endpoint,
        list_transaction_categories_endpoint,
    },
    transaction_split::{
        create_transaction_split_endpoint, get_transaction_split_endpoint,
        list_transaction_splits_endpoint,
    },
    transaction_type::{
        create_transaction_type_endpoint, get_transaction_type_endpoint,
        list_transaction_types_endpoint,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            endpoints::ACCOUNT_TYPES,
            get(list_account_types_endpoint).post(create_account_type_endpoint),
        )
        .route(endpoints::ACCOUNT_TYPE, get(get_account_type_endpoint))
        .route(
            endpoints::ACCOUNTS,
            get(list_accounts_endpoint).post(create_account_endpoint),
        )
        .route(endpoints::ACCOUNT, get(get_account_endpoint))
        .route(
            endpoints::ACCOUNT_TRANSACTIONS,
            get(get_account_transactions_endpoint),
        )
        .route(
            endpoints::ACCOUNT_RECURRING_TRANSACTIONS,
            get(get_account_recurring_transactions_endpoint),
        )
        .route(
            endpoints::RECURRING_TRANSACTIONS,
            get(list_recurring_transactions_endpoint).post(create_recurring_transaction_endpoint),
        )
        .route(
            endpoints::RECURRING_TRANSACTION,
            get(get_recurring_transaction_endpoint),
        )
        .route(
            endpoints::TRANSACTIONS,
            get(list_transactions_endpoint).post(create_transaction_endpoint),
        )
        .route(endpoints::TRANSACTION, get(get_transaction_endpoint))
        .route(
            endpoints::TRANSACTION_SPLITS_OF_TRANSACTION,
            get(get_transaction_splits_endpoint),
        )
        .route(
            endpoints::TRANSACTION_SPLITS,
            get(list_transaction_splits_endpoint).post(create_transaction_split_endpoint),
        )
        .route(
            endpoints::TRANSACTION_SPLIT,
            get(get_transaction_split_endpoint),
        )
        .route(
            endpoints::TRANSACTION_CATEGORIES,
            get(list_transaction_categories_endpoint).post(create_transaction_category_endpoint),
        )
        .route(
            endpoints::TRANSACTION_CATEGORY,
            get(get_transaction_category_endpoint),
        )
        .route(
            endpoints::TRANSACTION_TYPES,
            get(list_transaction_types_endpoint).post(create_transaction_type_endpoint),
        )
        .route(
            endpoints::TRANSACTION_TYPE,
            get(get_transaction_type_endpoint),
        )
        .fallback(get_404_not_found)
        .with_state(state)
}

async fn get_404_not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}
