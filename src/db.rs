//! Database schema initialization.

use rusqlite::{Connection, Transaction as SqlTransaction};

use crate::{
    Error, activity::create_activity_table, admin::create_admin_table,
    transaction::create_transaction_table, user::create_user_table,
};

/// Create the tables for all of the application's domain models.
///
/// The tables are created within a single exclusive transaction so that a
/// partially initialized schema is never observable.
///
/// # Errors
/// Returns an [Error::SqlError] if a table cannot be created.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    let transaction =
        SqlTransaction::new_unchecked(connection, rusqlite::TransactionBehavior::Exclusive)?;

    create_transaction_table(&transaction)?;
    create_activity_table(&transaction)?;
    create_user_table(&transaction)?;
    create_admin_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}
