use std::{path::PathBuf, process::ExitCode};

use clap::Parser;

use finance_tracker::{
    RetryPolicy, cancellation, run_migration_worker, setup_logging, shutdown_signal,
};

/// Create, migrate and seed the finance_tracker database, then exit.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to the application SQLite database.
    #[arg(long, env = "DATABASE_PATH")]
    db_path: PathBuf,

    /// How many times a phase is retried after a busy or locked database.
    #[arg(long, default_value_t = RetryPolicy::default().max_retries)]
    max_retries: u32,
}

#[tokio::main]
async fn main() -> ExitCode {
    setup_logging();

    let args = Args::parse();
    let policy = RetryPolicy {
        max_retries: args.max_retries,
        ..RetryPolicy::default()
    };

    let (trigger, cancellation) = cancellation();
    tokio::spawn(async move {
        shutdown_signal().await;
        tracing::info!("Cancelling migration");
        trigger.cancel();
    });

    match run_migration_worker(&args.db_path, &policy, &cancellation).await {
        Ok(report) => {
            tracing::info!(
                "Database {} is ready: created {}, applied migrations {:?}, seeded {} rows",
                args.db_path.display(),
                report.database_created,
                report.applied_migrations,
                report.seeded_rows
            );
            ExitCode::SUCCESS
        }
        Err(error) => {
            tracing::error!("Migration failed: {error}");
            ExitCode::FAILURE
        }
    }
}
