//! Implements a struct that holds the state of the REST server.

use std::sync::{Arc, Mutex, MutexGuard};

use rusqlite::Connection;

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The database connection
    pub db_connection: Arc<Mutex<Connection>>,
}

impl AppState {
    /// Create a new [AppState] from an open, migrated SQLite database
    /// connection.
    pub fn new(db_connection: Connection) -> Self {
        Self {
            db_connection: Arc::new(Mutex::new(db_connection)),
        }
    }

    /// Acquire the database connection for the duration of one request.
    ///
    /// A lock poisoned by a panicking handler is recovered. Every handler
    /// runs its statement to completion or not at all, so the connection is
    /// never left mid-transaction.
    pub fn connection(&self) -> MutexGuard<'_, Connection> {
        self.db_connection.lock().unwrap_or_else(|poisoned| {
            tracing::warn!("Recovering database connection from a poisoned lock");
            self.db_connection.clear_poison();
            poisoned.into_inner()
        })
    }
}
