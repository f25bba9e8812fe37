//! Database operations for transaction categories.

use rusqlite::{Connection, Row};

use crate::{
    Error,
    transaction_category::{NewTransactionCategory, TransactionCategory, TransactionCategoryId},
};

/// Create a transaction category and return it with its generated ID.
pub fn create_transaction_category(
    new_transaction_category: NewTransactionCategory,
    connection: &Connection,
) -> Result<TransactionCategory, Error> {
    connection.execute(
        "INSERT INTO transaction_category (name) VALUES (?1)",
        (&new_transaction_category.name,),
    )?;

    let id = connection.last_insert_rowid();

    Ok(TransactionCategory {
        id,
        name: new_transaction_category.name,
    })
}

/// Retrieve a single transaction category by ID.
pub fn get_transaction_category(
    id: TransactionCategoryId,
    connection: &Connection,
) -> Result<TransactionCategory, Error> {
    connection
        .prepare("SELECT id, name FROM transaction_category WHERE id = :id")?
        .query_row(&[(":id", &id)], map_row)
        .map_err(|error| error.into())
}

/// Retrieve all transaction categories in the order they were created.
pub fn get_all_transaction_categories(
    connection: &Connection,
) -> Result<Vec<TransactionCategory>, Error> {
    connection
        .prepare("SELECT id, name FROM transaction_category ORDER BY id ASC")?
        .query_map([], map_row)?
        .map(|maybe_category| maybe_category.map_err(|error| error.into()))
        .collect()
}

fn map_row(row: &Row) -> Result<TransactionCategory, rusqlite::Error> {
    Ok(TransactionCategory {
        id: row.get(0)?,
        name: row.get(1)?,
    })
}
