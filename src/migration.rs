//! Versioned schema migrations.
//!
//! The applied version is recorded in SQLite's `PRAGMA user_version`. All
//! pending migrations are applied in one transaction, so a failure leaves
//! the schema at the version it started from.

use rusqlite::{Connection, TransactionBehavior};

use crate::Error;

/// A single step from version `version - 1` to `version`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Migration {
    /// The schema version after this migration has been applied.
    pub version: i64,
    /// A short human readable summary for the logs.
    pub description: &'static str,
    /// The SQL batch to execute.
    pub sql: &'static str,
}

/// Every migration known to this build, in version order.
pub const MIGRATIONS: &[Migration] = &[
    Migration {
        version: 1,
        description: "create tables",
        sql: "CREATE TABLE account_type (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL
            );

            CREATE TABLE account (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                balance REAL NOT NULL,
                account_type_id INTEGER NOT NULL,
                FOREIGN KEY(account_type_id) REFERENCES account_type(id)
            );

            CREATE TABLE transaction_type (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL
            );

            CREATE TABLE transaction_category (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL
            );

            CREATE TABLE \"transaction\" (
                id INTEGER PRIMARY KEY,
                date TEXT NOT NULL,
                amount REAL NOT NULL,
                description TEXT NOT NULL,
                account_id INTEGER NOT NULL,
                transaction_type_id INTEGER NOT NULL,
                transaction_category_id INTEGER,
                FOREIGN KEY(account_id) REFERENCES account(id),
                FOREIGN KEY(transaction_type_id) REFERENCES transaction_type(id),
                FOREIGN KEY(transaction_category_id) REFERENCES transaction_category(id)
            );

            CREATE TABLE transaction_split (
                id INTEGER PRIMARY KEY,
                amount REAL NOT NULL,
                transaction_category_id INTEGER NOT NULL,
                transaction_id INTEGER NOT NULL,
                FOREIGN KEY(transaction_category_id) REFERENCES transaction_category(id),
                FOREIGN KEY(transaction_id) REFERENCES \"transaction\"(id)
            );

            CREATE TABLE recurring_transaction (
                id INTEGER PRIMARY KEY,
                description TEXT NOT NULL,
                amount REAL NOT NULL,
                frequency INTEGER NOT NULL,
                start_date TEXT NOT NULL,
                end_date TEXT,
                account_id INTEGER NOT NULL,
                FOREIGN KEY(account_id) REFERENCES account(id)
            );",
    },
    Migration {
        version: 2,
        description: "index child foreign keys",
        sql: "CREATE INDEX idx_transaction_account_id ON \"transaction\"(account_id);
            CREATE INDEX idx_transaction_split_transaction_id ON transaction_split(transaction_id);
            CREATE INDEX idx_recurring_transaction_account_id ON recurring_transaction(account_id);",
    },
];

/// The version the schema is at once every migration in [MIGRATIONS] has
/// been applied.
pub fn latest_version() -> i64 {
    MIGRATIONS
        .iter()
        .map(|migration| migration.version)
        .max()
        .unwrap_or(0)
}

/// The schema version currently recorded in the database.
pub fn schema_version(connection: &Connection) -> Result<i64, Error> {
    connection
        .query_row("PRAGMA user_version;", [], |row| row.get(0))
        .map_err(|error| error.into())
}

/// Apply every pending migration in [MIGRATIONS].
///
/// Returns the versions that were applied, which is empty when the schema
/// is already up to date.
///
/// # Errors
/// Returns an SQL error if any migration fails, in which case none of the
/// pending migrations are applied.
pub fn migrate(connection: &mut Connection) -> Result<Vec<i64>, Error> {
    apply_migrations(connection, MIGRATIONS)
}

pub(crate) fn apply_migrations(
    connection: &mut Connection,
    migrations: &[Migration],
) -> Result<Vec<i64>, Error> {
    let transaction = connection.transaction_with_behavior(TransactionBehavior::Immediate)?;

    let current_version = schema_version(&transaction)?;

    let mut pending: Vec<&Migration> = migrations
        .iter()
        .filter(|migration| migration.version > current_version)
        .collect();
    pending.sort_by_key(|migration| migration.version);

    let mut applied = Vec::with_capacity(pending.len());

    for migration in pending {
        tracing::info!(
            "Applying migration {} ({})",
            migration.version,
            migration.description
        );

        if let Err(error) = transaction.execute_batch(migration.sql) {
            tracing::error!("Migration {} failed: {error}", migration.version);
            return Err(error.into());
        }

        transaction.pragma_update(None, "user_version", migration.version)?;
        applied.push(migration.version);
    }

    transaction.commit()?;

    Ok(applied)
}
