//! Opening and preparing the application's SQLite database file.

use std::path::Path;

use rusqlite::{Connection, OpenFlags};

use crate::Error;

/// Create the SQLite database at `path` if it does not exist yet.
///
/// Missing parent directories are created as well. Returns `true` if the
/// database was created and `false` if it already existed.
///
/// # Errors
/// Returns [Error::Io] if the parent directories cannot be created, or an
/// SQL error if SQLite cannot create the file.
pub fn ensure_database_exists(path: &Path) -> Result<bool, Error> {
    if path.exists() {
        tracing::debug!("Database {} already exists", path.display());
        return Ok(false);
    }

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|error| Error::Io(parent.display().to_string(), error.to_string()))?;
    }

    let connection = Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_CREATE,
    )?;
    // Writing the header forces the first page to disk.
    connection.pragma_update(None, "user_version", 0)?;
    drop(connection);

    tracing::info!("Created database {}", path.display());

    Ok(true)
}

/// Open an existing SQLite database at `path`.
///
/// The database is never created here, see [ensure_database_exists].
///
/// # Errors
/// Returns an SQL error if the file does not exist or cannot be opened.
pub fn open_connection(path: &Path) -> Result<Connection, Error> {
    let connection = Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_WRITE
            | OpenFlags::SQLITE_OPEN_URI
            | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )?;

    configure_connection(&connection)?;

    Ok(connection)
}

/// Apply the per-connection settings every connection needs.
pub(crate) fn configure_connection(connection: &Connection) -> Result<(), Error> {
    connection.pragma_update(None, "foreign_keys", true)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::{
        Error,
        db::{ensure_database_exists, open_connection},
        test_utils::TempDatabasePath,
    };

    #[test]
    fn creates_missing_database() {
        let path = TempDatabasePath::new();

        let created = ensure_database_exists(path.as_ref()).unwrap();

        assert!(created);
        assert!(path.as_ref().exists());
    }

    #[test]
    fn existing_database_is_left_alone() {
        let path = TempDatabasePath::new();
        ensure_database_exists(path.as_ref()).unwrap();

        let created = ensure_database_exists(path.as_ref()).unwrap();

        assert!(!created);
    }

    #[test]
    fn creates_missing_parent_directories() {
        let path = TempDatabasePath::nested();

        let created = ensure_database_exists(path.as_ref()).unwrap();

        assert!(created);
        assert!(path.as_ref().exists());
    }

    #[test]
    fn open_does_not_create_database() {
        let path = TempDatabasePath::new();

        let result = open_connection(path.as_ref());

        assert!(matches!(result, Err(Error::SqlError(_))));
        assert!(!path.as_ref().exists());
    }

    #[test]
    fn open_enables_foreign_keys() {
        let path = TempDatabasePath::new();
        ensure_database_exists(path.as_ref()).unwrap();

        let connection = open_connection(path.as_ref()).unwrap();

        let enabled: bool = connection
            .query_row("PRAGMA foreign_keys;", [], |row| row.get(0))
            .unwrap();
        assert!(enabled);
    }
}
