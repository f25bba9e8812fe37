//! Inserts the reference rows other data depends on.

use rusqlite::{Connection, TransactionBehavior};

use crate::Error;

/// The account types every database starts with.
pub const ACCOUNT_TYPE_NAMES: [&str; 3] = ["Savings", "Current", "Investment"];

/// The transaction types every database starts with.
pub const TRANSACTION_TYPE_NAMES: [&str; 2] = ["Change", "BalanceUpdate"];

/// Insert any reference row that is missing, all in one transaction.
///
/// Rows are matched by name, so running this again inserts nothing.
/// Returns the number of rows inserted.
///
/// # Errors
/// Returns an SQL error if a query fails, in which case nothing is inserted.
pub fn seed(connection: &mut Connection) -> Result<usize, Error> {
    let transaction = connection.transaction_with_behavior(TransactionBehavior::Immediate)?;

    let mut inserted = 0;

    for name in ACCOUNT_TYPE_NAMES {
        if insert_if_missing(&transaction, "account_type", name)? {
            inserted += 1;
        }
    }

    for name in TRANSACTION_TYPE_NAMES {
        if insert_if_missing(&transaction, "transaction_type", name)? {
            inserted += 1;
        }
    }

    transaction.commit()?;

    tracing::info!("Seeded {inserted} reference rows");

    Ok(inserted)
}

/// `table` must be one of the name-only lookup tables.
fn insert_if_missing(connection: &Connection, table: &str, name: &str) -> Result<bool, Error> {
    let exists: bool = connection.query_row(
        &format!("SELECT EXISTS (SELECT 1 FROM {table} WHERE name = ?1)"),
        [name],
        |row| row.get(0),
    )?;

    if exists {
        return Ok(false);
    }

    connection.execute(&format!("INSERT INTO {table} (name) VALUES (?1)"), [name])?;
    tracing::debug!("Inserted {table} \"{name}\"");

    Ok(true)
}

#[cfg(test)]
mod tests {
    use rusqlite::Connection;

    use crate::{
        seed::{ACCOUNT_TYPE_NAMES, TRANSACTION_TYPE_NAMES, seed},
        test_utils::get_test_connection,
    };

    fn count_named(connection: &Connection, table: &str, name: &str) -> i64 {
        connection
            .query_row(
                &format!("SELECT COUNT(*) FROM {table} WHERE name = ?1"),
                [name],
                |row| row.get(0),
            )
            .unwrap()
    }

    #[test]
    fn seed_inserts_every_reference_row() {
        let mut connection = get_test_connection();

        let inserted = seed(&mut connection).unwrap();

        assert_eq!(inserted, 5);
        for name in ACCOUNT_TYPE_NAMES {
            assert_eq!(count_named(&connection, "account_type", name), 1, "{name}");
        }
        for name in TRANSACTION_TYPE_NAMES {
            assert_eq!(count_named(&connection, "transaction_type", name), 1, "{name}");
        }
    }

    #[test]
    fn seed_twice_inserts_nothing_the_second_time() {
        let mut connection = get_test_connection();
        seed(&mut connection).unwrap();

        let inserted = seed(&mut connection).unwrap();

        assert_eq!(inserted, 0);
        for name in ACCOUNT_TYPE_NAMES {
            assert_eq!(count_named(&connection, "account_type", name), 1, "{name}");
        }
        for name in TRANSACTION_TYPE_NAMES {
            assert_eq!(count_named(&connection, "transaction_type", name), 1, "{name}");
        }
    }

    #[test]
    fn seed_only_fills_gaps() {
        let mut connection = get_test_connection();
        connection
            .execute("INSERT INTO account_type (name) VALUES ('Current')", ())
            .unwrap();
        connection
            .execute("INSERT INTO transaction_type (name) VALUES ('Change')", ())
            .unwrap();

        let inserted = seed(&mut connection).unwrap();

        assert_eq!(inserted, 3);
        assert_eq!(count_named(&connection, "account_type", "Current"), 1);
        assert_eq!(count_named(&connection, "transaction_type", "Change"), 1);
    }

    #[test]
    fn seed_fails_without_schema() {
        let mut connection = Connection::open_in_memory().unwrap();

        assert!(seed(&mut connection).is_err());
    }
}
