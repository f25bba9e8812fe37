//! Route handlers for accounts and the records that hang off an account.

use axum::{
    Json,
    extract::State,
    response::Response,
};

use crate::{
    AppState, Error,
    account::{Account, AccountId, NewAccount, create_account, get_account, get_all_accounts},
    endpoints,
    payload::{PathId, Payload, created},
    recurring_transaction::{RecurringTransaction, get_recurring_transactions_for_account},
    transaction::{Transaction, get_transactions_for_account},
};

/// A route handler that lists every account.
pub async fn list_accounts_endpoint(
    State(state): State<AppState>,
) -> Result<Json<Vec<Account>>, Error> {
    let connection = state.connection();

    get_all_accounts(&connection).map(Json)
}

/// A route handler for getting an account by its database ID.
pub async fn get_account_endpoint(
    State(state): State<AppState>,
    PathId(account_id): PathId<AccountId>,
) -> Result<Json<Account>, Error> {
    let connection = state.connection();

    get_account(account_id, &connection).map(Json)
}

/// A route handler for creating a new account.
pub async fn create_account_endpoint(
    State(state): State<AppState>,
    Payload(new_account): Payload<NewAccount>,
) -> Result<Response, Error> {
    let connection = state.connection();
    let account = create_account(new_account, &connection)?;

    Ok(created(endpoints::ACCOUNT, account.id, account))
}

/// A route handler that lists the transactions of an account.
///
/// An account that does not exist simply has no transactions.
pub async fn get_account_transactions_endpoint(
    State(state): State<AppState>,
    PathId(account_id): PathId<AccountId>,
) -> Result<Json<Vec<Transaction>>, Error> {
    let connection = state.connection();

    get_transactions_for_account(account_id, &connection).map(Json)
}

/// A route handler that lists the recurring transactions of an account.
pub async fn get_account_recurring_transactions_endpoint(
    State(state): State<AppState>,
    PathId(account_id): PathId<AccountId>,
) -> Result<Json<Vec<RecurringTransaction>>, Error> {
    let connection = state.connection();

    get_recurring_transactions_for_account(account_id, &connection).map(Json)
}

#[cfg(test)]
mod tests {
    use axum::http::{StatusCode, header::LOCATION};
    use axum_test::TestServer;
    use serde_json::json;

    use crate::{
        AppState,
        account::Account,
        build_router, endpoints,
        recurring_transaction::{Frequency, RecurringTransaction},
        seed,
        test_utils::get_test_connection,
        transaction::Transaction,
    };

    fn get_seeded_server() -> TestServer {
        let mut connection = get_test_connection();
        seed(&mut connection).unwrap();

        TestServer::try_new(build_router(AppState::new(connection)))
            .expect("Could not create test server.")
    }

    #[tokio::test]
    async fn create_then_fetch_account() {
        let server = get_seeded_server();

        let response = server
            .post(endpoints::ACCOUNTS)
            .json(&json!({ "name": "Checking", "balance": 100.0, "accountTypeId": 1 }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let account = response.json::<Account>();
        assert_eq!(account.name, "Checking");
        assert_eq!(account.balance, 100.0);
        assert_eq!(account.account_type_id, 1);
        assert_eq!(
            response.header(LOCATION),
            format!("/accounts/{}", account.id)
        );

        let fetched = server
            .get(&format!("/accounts/{}", account.id))
            .await
            .json::<Account>();
        assert_eq!(fetched, account);

        let transactions = server
            .get(&format!("/accounts/{}/transactions", account.id))
            .await
            .json::<Vec<Transaction>>();
        assert!(transactions.is_empty());
    }

    #[tokio::test]
    async fn list_accounts_in_creation_order() {
        let server = get_seeded_server();
        let mut inserted = Vec::new();
        for name in ["Checking", "Savings", "Visa"] {
            let account = server
                .post(endpoints::ACCOUNTS)
                .json(&json!({ "name": name, "balance": 0.0, "accountTypeId": 2 }))
                .await
                .json::<Account>();
            inserted.push(account);
        }

        let listed = server.get(endpoints::ACCOUNTS).await.json::<Vec<Account>>();

        assert_eq!(listed, inserted);
    }

    #[tokio::test]
    async fn unknown_account_type_is_a_server_error() {
        let server = get_seeded_server();

        server
            .post(endpoints::ACCOUNTS)
            .json(&json!({ "name": "Checking", "balance": 0.0, "accountTypeId": 99 }))
            .await
            .assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn client_supplied_id_is_rejected() {
        let server = get_seeded_server();

        let response = server
            .post(endpoints::ACCOUNTS)
            .json(&json!({ "id": 7, "name": "Checking", "balance": 0.0, "accountTypeId": 1 }))
            .await;

        response.assert_status_bad_request();
        assert_eq!(
            response.header("content-type"),
            "application/problem+json"
        );
    }

    #[tokio::test]
    async fn wrongly_typed_balance_is_rejected() {
        let server = get_seeded_server();

        server
            .post(endpoints::ACCOUNTS)
            .json(&json!({ "name": "Checking", "balance": "lots", "accountTypeId": 1 }))
            .await
            .assert_status_bad_request();
    }

    #[tokio::test]
    async fn lists_recurring_transactions_of_account() {
        let server = get_seeded_server();
        let account = server
            .post(endpoints::ACCOUNTS)
            .json(&json!({ "name": "Checking", "balance": 0.0, "accountTypeId": 2 }))
            .await
            .json::<Account>();
        let wages = server
            .post(endpoints::RECURRING_TRANSACTIONS)
            .json(&json!({
                "description": "Wages",
                "amount": 2000.0,
                "frequency": "Fortnightly",
                "startDate": "2025-01-10",
                "accountId": account.id,
            }))
            .await
            .json::<RecurringTransaction>();

        let listed = server
            .get(&format!("/accounts/{}/recurringTransactions", account.id))
            .await
            .json::<Vec<RecurringTransaction>>();

        assert_eq!(listed, vec![wages.clone()]);
        assert_eq!(wages.frequency, Frequency::Fortnightly);
    }
}
