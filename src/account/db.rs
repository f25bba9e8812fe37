//! Database operations for accounts.

use rusqlite::{Connection, Row};

use crate::{
    Error,
    account::{Account, AccountId, NewAccount},
};

/// Create an account and return it with its generated ID.
///
/// # Errors
/// Returns an SQL error if `account_type_id` does not refer to an existing
/// account type.
pub fn create_account(new_account: NewAccount, connection: &Connection) -> Result<Account, Error> {
    connection.execute(
        "INSERT INTO account (name, balance, account_type_id) VALUES (?1, ?2, ?3)",
        (
            &new_account.name,
            new_account.balance,
            new_account.account_type_id,
        ),
    )?;

    let id = connection.last_insert_rowid();

    Ok(Account {
        id,
        name: new_account.name,
        balance: new_account.balance,
        account_type_id: new_account.account_type_id,
    })
}

/// Retrieve a single account by ID.
pub fn get_account(id: AccountId, connection: &Connection) -> Result<Account, Error> {
    connection
        .prepare("SELECT id, name, balance, account_type_id FROM account WHERE id = :id")?
        .query_row(&[(":id", &id)], map_row)
        .map_err(|error| error.into())
}

/// Retrieve all accounts in the order they were created.
pub fn get_all_accounts(connection: &Connection) -> Result<Vec<Account>, Error> {
    connection
        .prepare("SELECT id, name, balance, account_type_id FROM account ORDER BY id ASC")?
        .query_map([], map_row)?
        .map(|maybe_account| maybe_account.map_err(|error| error.into()))
        .collect()
}

fn map_row(row: &Row) -> Result<Account, rusqlite::Error> {
    let id = row.get(0)?;
    let name = row.get(1)?;
    let balance = row.get(2)?;
    let account_type_id = row.get(3)?;

    Ok(Account {
        id,
        name,
        balance,
        account_type_id,
    })
}

#[cfg(test)]
mod tests {
    use crate::{Error, seed, test_utils::get_test_connection};

    use super::{NewAccount, create_account, get_account, get_all_accounts};

    fn checking() -> NewAccount {
        NewAccount {
            name: "Checking".to_owned(),
            balance: 100.0,
            account_type_id: 1,
        }
    }

    #[test]
    fn can_create_account() {
        let mut connection = get_test_connection();
        seed(&mut connection).unwrap();

        let account = create_account(checking(), &connection).unwrap();

        assert!(account.id > 0);
        assert_eq!(account.name, "Checking");
        assert_eq!(account.balance, 100.0);
        assert_eq!(account.account_type_id, 1);
    }

    #[test]
    fn create_fails_on_unknown_account_type() {
        let connection = get_test_connection();

        let result = create_account(checking(), &connection);

        assert!(matches!(result, Err(Error::SqlError(_))));
        assert_eq!(get_all_accounts(&connection), Ok(vec![]));
    }

    #[test]
    fn get_returns_created_account() {
        let mut connection = get_test_connection();
        seed(&mut connection).unwrap();
        let inserted = create_account(checking(), &connection).unwrap();

        assert_eq!(get_account(inserted.id, &connection), Ok(inserted));
    }

    #[test]
    fn get_missing_account_is_not_found() {
        let connection = get_test_connection();

        assert_eq!(get_account(1, &connection), Err(Error::NotFound));
    }

    #[test]
    fn get_all_returns_accounts_in_insertion_order() {
        let mut connection = get_test_connection();
        seed(&mut connection).unwrap();
        let first = create_account(checking(), &connection).unwrap();
        let second = create_account(
            NewAccount {
                name: "Rainy day".to_owned(),
                balance: -12.5,
                account_type_id: 2,
            },
            &connection,
        )
        .unwrap();

        assert_eq!(get_all_accounts(&connection), Ok(vec![first, second]));
    }
}
