//! A personal finance tracker.
//!
//! This library provides a JSON REST API over a SQLite database of accounts,
//! transactions and the lookup tables they reference, plus a run-once worker
//! that creates, migrates and seeds that database.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    http::{StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use serde_json::json;
use tokio::signal;

mod account;
mod account_type;
mod app_state;
mod cancellation;
mod database_id;
mod db;
mod endpoints;
mod logging;
mod migration;
mod payload;
mod recurring_transaction;
mod retry;
mod routing;
mod seed;
mod transaction;
mod transaction_category;
mod transaction_split;
mod transaction_type;
mod worker;

#[cfg(test)]
mod test_utils;

pub use account::{Account, NewAccount};
pub use account_type::{AccountType, NewAccountType};
pub use app_state::AppState;
pub use cancellation::{Cancellation, CancellationTrigger, cancellation};
pub use database_id::DatabaseId;
pub use db::{ensure_database_exists, open_connection};
pub use logging::{LOG_BODY_LENGTH_LIMIT, REQUEST_BODY_LIMIT, logging_middleware, setup_logging};
pub use migration::{MIGRATIONS, Migration, latest_version, migrate, schema_version};
pub use recurring_transaction::{Frequency, NewRecurringTransaction, RecurringTransaction};
pub use retry::{RetryPolicy, execute_with_retry};
pub use routing::build_router;
pub use seed::{ACCOUNT_TYPE_NAMES, TRANSACTION_TYPE_NAMES, seed};
pub use transaction::{NewTransaction, Transaction};
pub use transaction_category::{NewTransactionCategory, TransactionCategory};
pub use transaction_split::{NewTransactionSplit, TransactionSplit};
pub use transaction_type::{NewTransactionType, TransactionType};
pub use worker::{MigrationWorkerReport, run_migration_worker};

/// Wait for either the ctrl+c or terminate signal, whichever comes first.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {error}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(error) => {
                tracing::error!("failed to install signal handler: {error}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::debug!("Received ctrl+c signal."),
        _ = terminate => tracing::debug!("Received terminate signal."),
    }
}

/// An async task that waits for a shutdown signal and then signals the
/// server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    shutdown_signal().await;
    handle.graceful_shutdown(Some(Duration::from_secs(1)));
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The requested resource was not found.
    ///
    /// For HTTP request handlers, the client should check that the ID is
    /// correct and that the resource has been created.
    ///
    /// Internally, this error occurs when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// The request body could not be read as the expected JSON shape, e.g.
    /// malformed JSON, a missing or unknown field, or a type mismatch.
    #[error("invalid request payload: {0}")]
    InvalidPayload(String),

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// A file system operation on the database file failed.
    ///
    /// Holds the path and the formatted I/O error.
    #[error("could not prepare the database file {0}: {1}")]
    Io(String, String),

    /// The database schema is not at the version this build expects.
    ///
    /// The migration worker must be run before serving requests.
    #[error("the database schema is at version {found} but version {expected} is required")]
    SchemaOutOfDate {
        /// The version recorded in the database.
        found: i64,
        /// The latest known migration version.
        expected: i64,
    },

    /// The operation was abandoned because a shutdown was requested.
    #[error("the operation was cancelled")]
    Cancelled,
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => Error::SqlError(error),
        }
    }
}

impl Error {
    /// Whether retrying the failed operation may succeed.
    ///
    /// Only SQLite's busy and locked conditions are transient.
    pub fn is_transient(&self) -> bool {
        match self {
            Error::SqlError(rusqlite::Error::SqliteFailure(error, _)) => matches!(
                error.code,
                rusqlite::ErrorCode::DatabaseBusy | rusqlite::ErrorCode::DatabaseLocked
            ),
            _ => false,
        }
    }
}

const PROBLEM_JSON: &str = "application/problem+json";

fn problem_details(status: StatusCode, problem_type: &str, title: &str) -> Response {
    let body = json!({
        "type": problem_type,
        "title": title,
        "status": status.as_u16(),
    });

    (status, [(CONTENT_TYPE, PROBLEM_JSON)], body.to_string()).into_response()
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => StatusCode::NOT_FOUND.into_response(),
            Error::InvalidPayload(reason) => {
                tracing::debug!("Rejected request payload: {reason}");
                problem_details(
                    StatusCode::BAD_REQUEST,
                    "https://tools.ietf.org/html/rfc9110#section-15.5.1",
                    "One or more validation errors occurred.",
                )
            }
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {error:?}");
                problem_details(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "https://tools.ietf.org/html/rfc9110#section-15.6.1",
                    "An error occurred while processing your request.",
                )
            }
        }
    }
}
