//! Route handlers for recurring transactions.

use axum::{
    Json,
    extract::State,
    response::Response,
};

use crate::{
    AppState, Error, endpoints,
    payload::{PathId, Payload, created},
    recurring_transaction::{
        NewRecurringTransaction, RecurringTransaction, RecurringTransactionId,
        create_recurring_transaction, get_all_recurring_transactions, get_recurring_transaction,
    },
};

/// A route handler that lists every recurring transaction.
pub async fn list_recurring_transactions_endpoint(
    State(state): State<AppState>,
) -> Result<Json<Vec<RecurringTransaction>>, Error> {
    let connection = state.connection();

    get_all_recurring_transactions(&connection).map(Json)
}

/// A route handler for getting a recurring transaction by its database ID.
pub async fn get_recurring_transaction_endpoint(
    State(state): State<AppState>,
    PathId(recurring_transaction_id): PathId<RecurringTransactionId>,
) -> Result<Json<RecurringTransaction>, Error> {
    let connection = state.connection();

    get_recurring_transaction(recurring_transaction_id, &connection).map(Json)
}

/// A route handler for creating a new recurring transaction.
pub async fn create_recurring_transaction_endpoint(
    State(state): State<AppState>,
    Payload(new_recurring): Payload<NewRecurringTransaction>,
) -> Result<Response, Error> {
    let connection = state.connection();
    let recurring = create_recurring_transaction(new_recurring, &connection)?;

    Ok(created(
        endpoints::RECURRING_TRANSACTION,
        recurring.id,
        recurring,
    ))
}
