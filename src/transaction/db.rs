//! Database operations for transactions.

use rusqlite::{Connection, Row};

use crate::{
    Error,
    account::AccountId,
    transaction::{NewTransaction, Transaction, TransactionId},
};

/// Create a transaction and return it with its generated ID.
///
/// Nothing checks that the referenced rows exist beyond the foreign key
/// constraints in the schema.
pub fn create_transaction(
    new_transaction: NewTransaction,
    connection: &Connection,
) -> Result<Transaction, Error> {
    connection.execute(
        "INSERT INTO \"transaction\" (date, amount, description, account_id, transaction_type_id, transaction_category_id)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        (
            new_transaction.date,
            new_transaction.amount,
            &new_transaction.description,
            new_transaction.account_id,
            new_transaction.transaction_type_id,
            new_transaction.transaction_category_id,
        ),
    )?;

    let id = connection.last_insert_rowid();

    Ok(Transaction {
        id,
        date: new_transaction.date,
        amount: new_transaction.amount,
        description: new_transaction.description,
        account_id: new_transaction.account_id,
        transaction_type_id: new_transaction.transaction_type_id,
        transaction_category_id: new_transaction.transaction_category_id,
    })
}

/// Retrieve a single transaction by ID.
pub fn get_transaction(id: TransactionId, connection: &Connection) -> Result<Transaction, Error> {
    connection
        .prepare(
            "SELECT id, date, amount, description, account_id, transaction_type_id, transaction_category_id
            FROM \"transaction\" WHERE id = :id",
        )?
        .query_row(&[(":id", &id)], map_row)
        .map_err(|error| error.into())
}

/// Retrieve all transactions in the order they were created.
pub fn get_all_transactions(connection: &Connection) -> Result<Vec<Transaction>, Error> {
    connection
        .prepare(
            "SELECT id, date, amount, description, account_id, transaction_type_id, transaction_category_id
            FROM \"transaction\" ORDER BY id ASC",
        )?
        .query_map([], map_row)?
        .map(|maybe_transaction| maybe_transaction.map_err(|error| error.into()))
        .collect()
}

/// Retrieve the transactions recorded against `account_id`.
///
/// An account without transactions, or an account that does not exist,
/// yields an empty vector.
pub fn get_transactions_for_account(
    account_id: AccountId,
    connection: &Connection,
) -> Result<Vec<Transaction>, Error> {
    connection
        .prepare(
            "SELECT id, date, amount, description, account_id, transaction_type_id, transaction_category_id
            FROM \"transaction\" WHERE account_id = :account_id ORDER BY id ASC",
        )?
        .query_map(&[(":account_id", &account_id)], map_row)?
        .map(|maybe_transaction| maybe_transaction.map_err(|error| error.into()))
        .collect()
}

fn map_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    Ok(Transaction {
        id: row.get(0)?,
        date: row.get(1)?,
        amount: row.get(2)?,
        description: row.get(3)?,
        account_id: row.get(4)?,
        transaction_type_id: row.get(5)?,
        transaction_category_id: row.get(6)?,
    })
}
