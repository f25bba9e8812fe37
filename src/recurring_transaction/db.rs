//! Database operations for recurring transactions.

use rusqlite::{Connection, Row, types::Type};

use crate::{
    Error,
    account::AccountId,
    recurring_transaction::{
        Frequency, NewRecurringTransaction, RecurringTransaction, RecurringTransactionId,
    },
};

/// Create a recurring transaction and return it with its generated ID.
pub fn create_recurring_transaction(
    new_recurring: NewRecurringTransaction,
    connection: &Connection,
) -> Result<RecurringTransaction, Error> {
    connection.execute(
        "INSERT INTO recurring_transaction (description, amount, frequency, start_date, end_date, account_id)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        (
            &new_recurring.description,
            new_recurring.amount,
            i64::from(new_recurring.frequency),
            new_recurring.start_date,
            new_recurring.end_date,
            new_recurring.account_id,
        ),
    )?;

    let id = connection.last_insert_rowid();

    Ok(RecurringTransaction {
        id,
        description: new_recurring.description,
        amount: new_recurring.amount,
        frequency: new_recurring.frequency,
        start_date: new_recurring.start_date,
        end_date: new_recurring.end_date,
        account_id: new_recurring.account_id,
    })
}

/// Retrieve a single recurring transaction by ID.
pub fn get_recurring_transaction(
    id: RecurringTransactionId,
    connection: &Connection,
) -> Result<RecurringTransaction, Error> {
    connection
        .prepare(
            "SELECT id, description, amount, frequency, start_date, end_date, account_id
            FROM recurring_transaction WHERE id = :id",
        )?
        .query_row(&[(":id", &id)], map_row)
        .map_err(|error| error.into())
}

/// Retrieve all recurring transactions in the order they were created.
pub fn get_all_recurring_transactions(
    connection: &Connection,
) -> Result<Vec<RecurringTransaction>, Error> {
    connection
        .prepare(
            "SELECT id, description, amount, frequency, start_date, end_date, account_id
            FROM recurring_transaction ORDER BY id ASC",
        )?
        .query_map([], map_row)?
        .map(|maybe_recurring| maybe_recurring.map_err(|error| error.into()))
        .collect()
}

/// Retrieve the recurring transactions of `account_id`, empty if there are
/// none.
pub fn get_recurring_transactions_for_account(
    account_id: AccountId,
    connection: &Connection,
) -> Result<Vec<RecurringTransaction>, Error> {
    connection
        .prepare(
            "SELECT id, description, amount, frequency, start_date, end_date, account_id
            FROM recurring_transaction WHERE account_id = :account_id ORDER BY id ASC",
        )?
        .query_map(&[(":account_id", &account_id)], map_row)?
        .map(|maybe_recurring| maybe_recurring.map_err(|error| error.into()))
        .collect()
}

fn map_row(row: &Row) -> Result<RecurringTransaction, rusqlite::Error> {
    let frequency_code: i64 = row.get(3)?;
    let frequency = Frequency::try_from(frequency_code).map_err(|error| {
        rusqlite::Error::FromSqlConversionFailure(3, Type::Integer, Box::new(error))
    })?;

    Ok(RecurringTransaction {
        id: row.get(0)?,
        description: row.get(1)?,
        amount: row.get(2)?,
        frequency,
        start_date: row.get(4)?,
        end_date: row.get(5)?,
        account_id: row.get(6)?,
    })
}
