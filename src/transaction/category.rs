//! The two-value category enumeration for transactions.

use std::{fmt::Display, str::FromStr};

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};

use crate::Error;

/// Whether a transaction takes money out of the till or puts money into it.
///
/// The wire and storage representation is the lowercase French name used by
/// the original service: `"depense"` (expense) or `"revenu"` (revenue).
/// Parsing is case-insensitive; no other value is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Money spent.
    Depense,
    /// Money earned.
    Revenu,
}

impl Category {
    /// The canonical lowercase name stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Depense => "depense",
            Category::Revenu => "revenu",
        }
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.eq_ignore_ascii_case("depense") {
            Ok(Category::Depense)
        } else if value.eq_ignore_ascii_case("revenu") {
            Ok(Category::Revenu)
        } else {
            Err(Error::InvalidCategory)
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl ToSql for Category {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(self.as_str().into())
    }
}

impl FromSql for Category {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|_| FromSqlError::InvalidType)
    }
}
