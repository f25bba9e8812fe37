//! Route handlers for account types.

use axum::{
    Json,
    extract::State,
    response::Response,
};

use crate::{
    AppState, Error,
    account_type::{
        AccountType, AccountTypeId, NewAccountType, create_account_type, get_account_type,
        get_all_account_types,
    },
    endpoints,
    payload::{PathId, Payload, created},
};

/// A route handler that lists every account type.
pub async fn list_account_types_endpoint(
    State(state): State<AppState>,
) -> Result<Json<Vec<AccountType>>, Error> {
    let connection = state.connection();

    get_all_account_types(&connection).map(Json)
}

/// A route handler for getting an account type by its database ID.
pub async fn get_account_type_endpoint(
    State(state): State<AppState>,
    PathId(account_type_id): PathId<AccountTypeId>,
) -> Result<Json<AccountType>, Error> {
    let connection = state.connection();

    get_account_type(account_type_id, &connection).map(Json)
}

/// A route handler for creating a new account type.
pub async fn create_account_type_endpoint(
    State(state): State<AppState>,
    Payload(new_account_type): Payload<NewAccountType>,
) -> Result<Response, Error> {
    let connection = state.connection();
    let account_type = create_account_type(new_account_type, &connection)?;

    Ok(created(endpoints::ACCOUNT_TYPE, account_type.id, account_type))
}
