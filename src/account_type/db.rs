//! Database operations for account types.

use rusqlite::{Connection, Row};

use crate::{
    Error,
    account_type::{AccountType, AccountTypeId, NewAccountType},
};

/// Create an account type and return it with its generated ID.
pub fn create_account_type(
    new_account_type: NewAccountType,
    connection: &Connection,
) -> Result<AccountType, Error> {
    connection.execute(
        "INSERT INTO account_type (name) VALUES (?1)",
        (&new_account_type.name,),
    )?;

    let id = connection.last_insert_rowid();

    Ok(AccountType {
        id,
        name: new_account_type.name,
    })
}

/// Retrieve a single account type by ID.
pub fn get_account_type(id: AccountTypeId, connection: &Connection) -> Result<AccountType, Error> {
    connection
        .prepare("SELECT id, name FROM account_type WHERE id = :id")?
        .query_row(&[(":id", &id)], map_row)
        .map_err(|error| error.into())
}

/// Retrieve all account types in the order they were created.
pub fn get_all_account_types(connection: &Connection) -> Result<Vec<AccountType>, Error> {
    connection
        .prepare("SELECT id, name FROM account_type ORDER BY id ASC")?
        .query_map([], map_row)?
        .map(|maybe_account_type| maybe_account_type.map_err(|error| error.into()))
        .collect()
}

fn map_row(row: &Row) -> Result<AccountType, rusqlite::Error> {
    Ok(AccountType {
        id: row.get(0)?,
        name: row.get(1)?,
    })
}
