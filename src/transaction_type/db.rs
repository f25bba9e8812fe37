//! Database operations for transaction types.

use rusqlite::{Connection, Row};

use crate::{
    Error,
    transaction_type::{NewTransactionType, TransactionType, TransactionTypeId},
};

/// Create a transaction type and return it with its generated ID.
pub fn create_transaction_type(
    new_transaction_type: NewTransactionType,
    connection: &Connection,
) -> Result<TransactionType, Error> {
    connection.execute(
        "INSERT INTO transaction_type (name) VALUES (?1)",
        (&new_transaction_type.name,),
    )?;

    let id = connection.last_insert_rowid();

    Ok(TransactionType {
        id,
        name: new_transaction_type.name,
    })
}

/// Retrieve a single transaction type by ID.
pub fn get_transaction_type(
    id: TransactionTypeId,
    connection: &Connection,
) -> Result<TransactionType, Error> {
    connection
        .prepare("SELECT id, name FROM transaction_type WHERE id = :id")?
        .query_row(&[(":id", &id)], map_row)
        .map_err(|error| error.into())
}

/// Retrieve all transaction types in the order they were created.
pub fn get_all_transaction_types(
    connection: &Connection,
) -> Result<Vec<TransactionType>, Error> {
    connection
        .prepare("SELECT id, name FROM transaction_type ORDER BY id ASC")?
        .query_map([], map_row)?
        .map(|maybe_type| maybe_type.map_err(|error| error.into()))
        .collect()
}

fn map_row(row: &Row) -> Result<TransactionType, rusqlite::Error> {
    Ok(TransactionType {
        id: row.get(0)?,
        name: row.get(1)?,
    })
}
