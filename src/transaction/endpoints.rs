//! Route handlers for transactions.

use axum::{
    Json,
    extract::State,
    response::Response,
};

use crate::{
    AppState, Error, endpoints,
    payload::{PathId, Payload, created},
    transaction::{
        NewTransaction, Transaction, TransactionId, create_transaction, get_all_transactions,
        get_transaction,
    },
    transaction_split::{TransactionSplit, get_splits_for_transaction},
};

/// A route handler that lists every transaction.
pub async fn list_transactions_endpoint(
    State(state): State<AppState>,
) -> Result<Json<Vec<Transaction>>, Error> {
    let connection = state.connection();

    get_all_transactions(&connection).map(Json)
}

/// A route handler for getting a transaction by its database ID.
pub async fn get_transaction_endpoint(
    State(state): State<AppState>,
    PathId(transaction_id): PathId<TransactionId>,
) -> Result<Json<Transaction>, Error> {
    let connection = state.connection();

    get_transaction(transaction_id, &connection).map(Json)
}

/// A route handler for creating a new transaction.
pub async fn create_transaction_endpoint(
    State(state): State<AppState>,
    Payload(new_transaction): Payload<NewTransaction>,
) -> Result<Response, Error> {
    let connection = state.connection();
    let transaction = create_transaction(new_transaction, &connection)?;

    Ok(created(endpoints::TRANSACTION, transaction.id, transaction))
}

/// A route handler that lists how a transaction is split across categories.
pub async fn get_transaction_splits_endpoint(
    State(state): State<AppState>,
    PathId(transaction_id): PathId<TransactionId>,
) -> Result<Json<Vec<TransactionSplit>>, Error> {
    let connection = state.connection();

    get_splits_for_transaction(transaction_id, &connection).map(Json)
}
