//! Database operations for transaction splits.

use rusqlite::{Connection, Row};

use crate::{
    Error,
    transaction::TransactionId,
    transaction_split::{NewTransactionSplit, TransactionSplit, TransactionSplitId},
};

/// Create a split and return it with its generated ID.
pub fn create_transaction_split(
    new_split: NewTransactionSplit,
    connection: &Connection,
) -> Result<TransactionSplit, Error> {
    connection.execute(
        "INSERT INTO transaction_split (amount, transaction_category_id, transaction_id)
        VALUES (?1, ?2, ?3)",
        (
            new_split.amount,
            new_split.transaction_category_id,
            new_split.transaction_id,
        ),
    )?;

    let id = connection.last_insert_rowid();

    Ok(TransactionSplit {
        id,
        amount: new_split.amount,
        transaction_category_id: new_split.transaction_category_id,
        transaction_id: new_split.transaction_id,
    })
}

/// Retrieve a single split by ID.
pub fn get_transaction_split(
    id: TransactionSplitId,
    connection: &Connection,
) -> Result<TransactionSplit, Error> {
    connection
        .prepare(
            "SELECT id, amount, transaction_category_id, transaction_id
            FROM transaction_split WHERE id = :id",
        )?
        .query_row(&[(":id", &id)], map_row)
        .map_err(|error| error.into())
}

/// Retrieve all splits in the order they were created.
pub fn get_all_transaction_splits(connection: &Connection) -> Result<Vec<TransactionSplit>, Error> {
    connection
        .prepare(
            "SELECT id, amount, transaction_category_id, transaction_id
            FROM transaction_split ORDER BY id ASC",
        )?
        .query_map([], map_row)?
        .map(|maybe_split| maybe_split.map_err(|error| error.into()))
        .collect()
}

/// Retrieve the splits of `transaction_id`, empty if there are none.
pub fn get_splits_for_transaction(
    transaction_id: TransactionId,
    connection: &Connection,
) -> Result<Vec<TransactionSplit>, Error> {
    connection
        .prepare(
            "SELECT id, amount, transaction_category_id, transaction_id
            FROM transaction_split WHERE transaction_id = :transaction_id ORDER BY id ASC",
        )?
        .query_map(&[(":transaction_id", &transaction_id)], map_row)?
        .map(|maybe_split| maybe_split.map_err(|error| error.into()))
        .collect()
}

fn map_row(row: &Row) -> Result<TransactionSplit, rusqlite::Error> {
    Ok(TransactionSplit {
        id: row.get(0)?,
        amount: row.get(1)?,
        transaction_category_id: row.get(2)?,
        transaction_id: row.get(3)?,
    })
}

#[cfg(test)]
mod tests {
    use rusqlite::Connection;
    use time::macros::date;

    use crate::{
        Error,
        account::{NewAccount, create_account},
        seed,
        test_utils::get_test_connection,
        transaction::{NewTransaction, create_transaction},
        transaction_category::{NewTransactionCategory, create_transaction_category},
    };

    use super::{
        NewTransactionSplit, create_transaction_split, get_all_transaction_splits,
        get_splits_for_transaction, get_transaction_split,
    };

    /// One account, one category and two transactions.
    fn get_connection_with_transactions() -> Connection {
        let mut connection = get_test_connection();
        seed(&mut connection).unwrap();
        create_account(
            NewAccount {
                name: "Checking".to_owned(),
                balance: 0.0,
                account_type_id: 1,
            },
            &connection,
        )
        .unwrap();
        create_transaction_category(
            NewTransactionCategory {
                name: "Food".to_owned(),
            },
            &connection,
        )
        .unwrap();
        for amount in [-100.0, -20.0] {
            create_transaction(
                NewTransaction {
                    date: date!(2025 - 01 - 02),
                    amount,
                    description: String::new(),
                    account_id: 1,
                    transaction_type_id: 1,
                    transaction_category_id: None,
                },
                &connection,
            )
            .unwrap();
        }
        connection
    }

    fn split(amount: f64, transaction_id: i64) -> NewTransactionSplit {
        NewTransactionSplit {
            amount,
            transaction_category_id: 1,
            transaction_id,
        }
    }

    #[test]
    fn splits_need_not_sum_to_parent_amount() {
        let connection = get_connection_with_transactions();

        let first = create_transaction_split(split(-70.0, 1), &connection).unwrap();
        let second = create_transaction_split(split(-70.0, 1), &connection).unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(
            get_splits_for_transaction(1, &connection),
            Ok(vec![first, second])
        );
    }

    #[test]
    fn get_returns_created_split() {
        let connection = get_connection_with_transactions();
        let inserted = create_transaction_split(split(-5.0, 2), &connection).unwrap();

        assert_eq!(get_transaction_split(inserted.id, &connection), Ok(inserted));
    }

    #[test]
    fn get_missing_split_is_not_found() {
        let connection = get_connection_with_transactions();

        assert_eq!(get_transaction_split(1, &connection), Err(Error::NotFound));
    }

    #[test]
    fn create_fails_on_unknown_transaction() {
        let connection = get_connection_with_transactions();

        let result = create_transaction_split(split(1.0, 999), &connection);

        assert!(matches!(result, Err(Error::SqlError(_))));
    }

    #[test]
    fn splits_are_filtered_by_transaction() {
        let connection = get_connection_with_transactions();
        create_transaction_split(split(-10.0, 1), &connection).unwrap();
        let other = create_transaction_split(split(-20.0, 2), &connection).unwrap();

        assert_eq!(get_splits_for_transaction(2, &connection), Ok(vec![other]));
        assert_eq!(get_splits_for_transaction(3, &connection), Ok(vec![]));
        assert_eq!(get_all_transaction_splits(&connection).unwrap().len(), 2);
    }
}
