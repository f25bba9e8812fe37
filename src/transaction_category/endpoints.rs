//! Route handlers for transaction categories.

use axum::{
    Json,
    extract::State,
    response::Response,
};

use crate::{
    AppState, Error, endpoints,
    payload::{PathId, Payload, created},
    transaction_category::{
        NewTransactionCategory, TransactionCategory, TransactionCategoryId,
        create_transaction_category, get_all_transaction_categories, get_transaction_category,
    },
};

/// A route handler that lists every transaction category.
pub async fn list_transaction_categories_endpoint(
    State(state): State<AppState>,
) -> Result<Json<Vec<TransactionCategory>>, Error> {
    let connection = state.connection();

    get_all_transaction_categories(&connection).map(Json)
}

/// A route handler for getting a transaction category by its database ID.
pub async fn get_transaction_category_endpoint(
    State(state): State<AppState>,
    PathId(transaction_category_id): PathId<TransactionCategoryId>,
) -> Result<Json<TransactionCategory>, Error> {
    let connection = state.connection();

    get_transaction_category(transaction_category_id, &connection).map(Json)
}

/// A route handler for creating a new transaction category.
pub async fn create_transaction_category_endpoint(
    State(state): State<AppState>,
    Payload(new_category): Payload<NewTransactionCategory>,
) -> Result<Response, Error> {
    let connection = state.connection();
    let category = create_transaction_category(new_category, &connection)?;

    Ok(created(endpoints::TRANSACTION_CATEGORY, category.id, category))
}
