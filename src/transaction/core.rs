//! Defines the core data models and database queries for transactions.

use rusqlite::{Connection, Row};
use serde::{Deserialize, Serialize};
use time::{OffsetDateTime, UtcOffset};

use crate::{Error, database_id::TransactionId, transaction::Category};

// ============================================================================
// MODELS
// ============================================================================

/// An expense or revenue, i.e. an event where money was either spent or
/// earned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// Whether the transaction is an expense or a revenue.
    pub category: Category,
    /// The amount of money that moved.
    pub amount: f64,
    /// A text description of what the transaction was for.
    pub description: Option<String>,
    /// When the transaction happened.
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
}

/// The JSON body accepted when creating or updating a transaction.
///
/// All fields are optional at the serde level so that missing fields produce
/// a `400` with a helpful message instead of a deserialization rejection.
#[derive(Debug, Serialize, Deserialize)]
pub struct TransactionData {
    /// The raw category value, validated by [TransactionData::into_builder].
    #[serde(default)]
    pub category: Option<String>,
    /// The amount of money that moved.
    #[serde(default)]
    pub amount: Option<f64>,
    /// A text description of what the transaction was for.
    #[serde(default)]
    pub description: Option<String>,
    /// When the transaction happened. Defaults to the current time.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub date: Option<OffsetDateTime>,
}

impl TransactionData {
    /// Validate the request body and produce a builder for the store.
    ///
    /// The category is matched case-insensitively and normalized to
    /// lowercase. A transaction must represent a non-zero flow of money, so
    /// a zero (or non-finite) amount is rejected here at the boundary.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::MissingField] if the category or amount is absent,
    /// - [Error::InvalidCategory] if the category is not a known value,
    /// - or [Error::ZeroAmount] if the amount is zero or not a finite number.
    pub fn into_builder(self) -> Result<TransactionBuilder, Error> {
        let category = self
            .category
            .ok_or(Error::MissingField("category"))?
            .parse::<Category>()?;

        let amount = self.amount.ok_or(Error::MissingField("amount"))?;

        if amount == 0.0 || !amount.is_finite() {
            return Err(Error::ZeroAmount);
        }

        Ok(TransactionBuilder {
            category,
            amount,
            description: self.description,
            // Timestamps are stored in UTC so their text form sorts by
            // instant.
            date: self.date.map(|date| date.to_offset(UtcOffset::UTC)),
        })
    }
}

/// A validated transaction that has not been written to the store yet.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionBuilder {
    /// Whether the transaction is an expense or a revenue.
    pub category: Category,
    /// The amount of money that moved. Never zero.
    pub amount: f64,
    /// A text description of what the transaction was for.
    pub description: Option<String>,
    /// When the transaction happened. `None` means "now", filled in by the
    /// store on insertion.
    pub date: Option<OffsetDateTime>,
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

/// Create a new transaction in the database.
///
/// The timestamp defaults to the current time when the builder carries none.
///
/// # Errors
/// This function will return an [Error::SqlError] if there is an SQL error.
pub fn create_transaction(
    builder: TransactionBuilder,
    connection: &Connection,
) -> Result<Transaction, Error> {
    let date = builder.date.unwrap_or_else(OffsetDateTime::now_utc);

    let transaction = connection
        .prepare(
            "INSERT INTO \"transaction\" (category, amount, description, date)
             VALUES (?1, ?2, ?3, ?4)
             RETURNING id, category, amount, description, date",
        )?
        .query_one(
            (builder.category, builder.amount, builder.description, date),
            map_transaction_row,
        )?;

    Ok(transaction)
}

/// Retrieve a transaction from the database by its `id`.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if `id` does not refer to a valid transaction,
/// - or [Error::SqlError] there is some other SQL error.
pub fn get_transaction(id: TransactionId, connection: &Connection) -> Result<Transaction, Error> {
    let transaction = connection
        .prepare(
            "SELECT id, category, amount, description, date FROM \"transaction\" WHERE id = :id",
        )?
        .query_one(&[(":id", &id)], map_transaction_row)?;

    Ok(transaction)
}

/// Retrieve all transactions, most recent first.
///
/// # Errors
/// This function will return an [Error::SqlError] if there is an SQL error.
pub fn list_transactions(connection: &Connection) -> Result<Vec<Transaction>, Error> {
    connection
        .prepare(
            "SELECT id, category, amount, description, date FROM \"transaction\"
             ORDER BY date DESC",
        )?
        .query_map([], map_transaction_row)?
        .map(|maybe_transaction| maybe_transaction.map_err(Error::from))
        .collect()
}

/// Replace the category, amount and description of an existing transaction.
///
/// The stored timestamp is kept as-is.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if `id` does not refer to a valid transaction,
/// - or [Error::SqlError] there is some other SQL error.
pub fn update_transaction(
    id: TransactionId,
    builder: TransactionBuilder,
    connection: &Connection,
) -> Result<Transaction, Error> {
    let transaction = connection
        .prepare(
            "UPDATE \"transaction\" SET category = ?1, amount = ?2, description = ?3
             WHERE id = ?4
             RETURNING id, category, amount, description, date",
        )?
        .query_one(
            (builder.category, builder.amount, builder.description, id),
            map_transaction_row,
        )?;

    Ok(transaction)
}

/// Delete a transaction from the database.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if `id` does not refer to a valid transaction,
/// - or [Error::SqlError] there is some other SQL error.
pub fn delete_transaction(id: TransactionId, connection: &Connection) -> Result<(), Error> {
    let rows_affected = connection.execute(
        "DELETE FROM \"transaction\" WHERE id = :id",
        &[(":id", &id)],
    )?;

    if rows_affected == 0 {
        return Err(Error::NotFound);
    }

    Ok(())
}

/// Create the transaction table in the database.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL
/// error.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS \"transaction\" (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                category TEXT NOT NULL CHECK (category IN ('depense', 'revenu')),
                amount REAL NOT NULL,
                description TEXT,
                date TEXT NOT NULL
                )",
        (),
    )?;

    // Ensure the sequence starts at 1
    connection.execute(
        "INSERT OR IGNORE INTO sqlite_sequence (name, seq) VALUES ('transaction', 0)",
        (),
    )?;

    // Index used by the date-ordered list and the reporting queries.
    connection.execute(
        "CREATE INDEX IF NOT EXISTS idx_transaction_date ON \"transaction\"(date);",
        (),
    )?;

    Ok(())
}

/// Map a database row to a Transaction.
pub fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    let id = row.get(0)?;
    let category = row.get(1)?;
    let amount = row.get(2)?;
    let description = row.get(3)?;
    let date = row.get(4)?;

    Ok(Transaction {
        id,
        category,
        amount,
        description,
        date,
    })
}
