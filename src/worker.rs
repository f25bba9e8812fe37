//! The run-once task that prepares a database for the REST server.

use std::path::Path;

use crate::{
    Error,
    cancellation::Cancellation,
    db::{ensure_database_exists, open_connection},
    migration::migrate,
    retry::{RetryPolicy, execute_with_retry},
    seed::seed,
};

/// What the migration worker changed.
#[derive(Debug, Clone, PartialEq)]
pub struct MigrationWorkerReport {
    /// Whether the database file had to be created.
    pub database_created: bool,
    /// The migration versions that were applied, in order.
    pub applied_migrations: Vec<i64>,
    /// The number of reference rows that were inserted.
    pub seeded_rows: usize,
}

/// Create, migrate and seed the database at `db_path`.
///
/// The three phases run one after the other and each is retried in full on
/// a transient storage fault. Each retry opens a fresh connection.
///
/// # Errors
/// Returns the first error that could not be retried away, or
/// [Error::Cancelled] if cancellation was requested between attempts.
pub async fn run_migration_worker(
    db_path: &Path,
    policy: &RetryPolicy,
    cancellation: &Cancellation,
) -> Result<MigrationWorkerReport, Error> {
    tracing::info!("Ensuring database {} exists", db_path.display());
    let database_created =
        execute_with_retry(policy, cancellation, || ensure_database_exists(db_path)).await?;

    tracing::info!("Applying pending migrations");
    let applied_migrations = execute_with_retry(policy, cancellation, || {
        let mut connection = open_connection(db_path)?;
        migrate(&mut connection)
    })
    .await?;

    tracing::info!("Seeding reference rows");
    let seeded_rows = execute_with_retry(policy, cancellation, || {
        let mut connection = open_connection(db_path)?;
        seed(&mut connection)
    })
    .await?;

    Ok(MigrationWorkerReport {
        database_created,
        applied_migrations,
        seeded_rows,
    })
}
