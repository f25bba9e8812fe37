//! Route handlers for transaction splits.

use axum::{
    Json,
    extract::State,
    response::Response,
};

use crate::{
    AppState, Error, endpoints,
    payload::{PathId, Payload, created},
    transaction_split::{
        NewTransactionSplit, TransactionSplit, TransactionSplitId, create_transaction_split,
        get_all_transaction_splits, get_transaction_split,
    },
};

/// A route handler that lists every transaction split.
pub async fn list_transaction_splits_endpoint(
    State(state): State<AppState>,
) -> Result<Json<Vec<TransactionSplit>>, Error> {
    let connection = state.connection();

    get_all_transaction_splits(&connection).map(Json)
}

/// A route handler for getting a transaction split by its database ID.
pub async fn get_transaction_split_endpoint(
    State(state): State<AppState>,
    PathId(transaction_split_id): PathId<TransactionSplitId>,
) -> Result<Json<TransactionSplit>, Error> {
    let connection = state.connection();

    get_transaction_split(transaction_split_id, &connection).map(Json)
}

/// A route handler for creating a new transaction split.
pub async fn create_transaction_split_endpoint(
    State(state): State<AppState>,
    Payload(new_split): Payload<NewTransactionSplit>,
) -> Result<Response, Error> {
    let connection = state.connection();
    let split = create_transaction_split(new_split, &connection)?;

    Ok(created(endpoints::TRANSACTION_SPLIT, split.id, split))
}
