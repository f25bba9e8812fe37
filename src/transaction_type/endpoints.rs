//! Route handlers for transaction types.

use axum::{
    Json,
    extract::State,
    response::Response,
};

use crate::{
    AppState, Error, endpoints,
    payload::{PathId, Payload, created},
    transaction_type::{
        NewTransactionType, TransactionType, TransactionTypeId, create_transaction_type,
        get_all_transaction_types, get_transaction_type,
    },
};

/// A route handler that lists every transaction type.
pub async fn list_transaction_types_endpoint(
    State(state): State<AppState>,
) -> Result<Json<Vec<TransactionType>>, Error> {
    let connection = state.connection();

    get_all_transaction_types(&connection).map(Json)
}

/// A route handler for getting a transaction type by its database ID.
pub async fn get_transaction_type_endpoint(
    State(state): State<AppState>,
    PathId(transaction_type_id): PathId<TransactionTypeId>,
) -> Result<Json<TransactionType>, Error> {
    let connection = state.connection();

    get_transaction_type(transaction_type_id, &connection).map(Json)
}

/// A route handler for creating a new transaction type.
pub async fn create_transaction_type_endpoint(
    State(state): State<AppState>,
    Payload(new_transaction_type): Payload<NewTransactionType>,
) -> Result<Response, Error> {
    let connection = state.connection();
    let transaction_type = create_transaction_type(new_transaction_type, &connection)?;

    Ok(created(
        endpoints::TRANSACTION_TYPE,
        transaction_type.id,
        transaction_type,
    ))
}
