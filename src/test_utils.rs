#![allow(missing_docs)]

use std::path::{Path, PathBuf};

use axum_test::TestServer;
use rusqlite::Connection;
use tempfile::{TempDir, tempdir};

use crate::{AppState, build_router, db::configure_connection, migrate};

/// An in-memory database with every migration applied.
pub(crate) fn get_test_connection() -> Connection {
    let mut connection =
        Connection::open_in_memory().expect("Could not initialise in-memory SQLite database");
    configure_connection(&connection).expect("Could not configure test database");
    migrate(&mut connection).expect("Could not migrate test database");
    connection
}

pub(crate) fn get_test_server() -> TestServer {
    let state = AppState::new(get_test_connection());

    TestServer::try_new(build_router(state)).expect("Could not create test server.")
}

/// A database file path inside a temporary directory that is removed on
/// drop.
pub(crate) struct TempDatabasePath {
    _dir: TempDir,
    path: PathBuf,
}

impl TempDatabasePath {
    pub(crate) fn new() -> Self {
        let dir = tempdir().expect("Could not create temporary directory");
        let path = dir.path().join("finance.db");
        Self { _dir: dir, path }
    }

    /// A path whose parent directories do not exist yet.
    pub(crate) fn nested() -> Self {
        let dir = tempdir().expect("Could not create temporary directory");
        let path = dir.path().join("a").join("b").join("finance.db");
        Self { _dir: dir, path }
    }
}

impl AsRef<Path> for TempDatabasePath {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use crate::db::ensure_database_exists;

    use super::TempDatabasePath;

    #[test]
    fn database_directory_is_removed_on_drop() {
        let path = TempDatabasePath::nested();
        ensure_database_exists(path.as_ref()).unwrap();
        let file = path.as_ref().to_path_buf();
        assert!(file.exists());

        drop(path);

        assert!(!file.exists());
    }

    #[test]
    fn paths_are_unique() {
        let first = TempDatabasePath::new();
        let second = TempDatabasePath::new();

        assert_ne!(first.as_ref(), second.as_ref());
    }
}
