//! Defines the core data models and database queries for users.

use rusqlite::{Connection, Row};
use serde::{Deserialize, Serialize};

use crate::{Error, database_id::UserId, password::PasswordHash};

// ============================================================================
// MODELS
// ============================================================================

/// A registered account of the application.
///
/// `User` deliberately does not implement `Serialize`: responses go through
/// [PublicUser] so the password hash can never leak to a client.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// The user's ID in the database.
    pub id: UserId,
    /// The email address associated with the user.
    pub email: String,
    /// The user's password hash.
    pub password_hash: PasswordHash,
    /// Whether an administrator has approved this account for login.
    pub is_approved: bool,
}

impl User {
    /// The client-safe view of this user.
    pub fn to_public(&self) -> PublicUser {
        PublicUser {
            id: self.id,
            email: self.email.clone(),
            is_approved: self.is_approved,
        }
    }
}

/// A user as served to clients: everything but the password hash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicUser {
    /// The user's ID in the database.
    pub id: UserId,
    /// The email address associated with the user.
    pub email: String,
    /// Whether an administrator has approved this account for login.
    pub is_approved: bool,
}

/// The JSON body accepted by the registration and login endpoints.
#[derive(Debug, Serialize, Deserialize)]
pub struct Credentials {
    /// The account email address.
    #[serde(default)]
    pub email: Option<String>,
    /// The account password, in the clear. Only ever logged redacted.
    #[serde(default)]
    pub password: Option<String>,
}

impl Credentials {
    /// Validate that both fields are present and non-blank.
    ///
    /// # Errors
    /// Returns an [Error::MissingField] naming the offending field.
    pub fn into_parts(self) -> Result<(String, String), Error> {
        let email = match self.email {
            Some(email) if !email.trim().is_empty() => email,
            _ => return Err(Error::MissingField("email")),
        };

        let password = match self.password {
            Some(password) if !password.is_empty() => password,
            _ => return Err(Error::MissingField("password")),
        };

        Ok((email, password))
    }
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

/// Create a new, unapproved user in the database.
///
/// # Errors
/// This function will return a:
/// - [Error::DuplicateEmail] if the email address is already registered,
/// - or [Error::SqlError] there is some other SQL error.
pub fn create_user(
    email: &str,
    password_hash: &PasswordHash,
    connection: &Connection,
) -> Result<User, Error> {
    let user = connection
        .prepare(
            "INSERT INTO user (email, password, is_approved) VALUES (?1, ?2, 0)
             RETURNING id, email, password, is_approved",
        )?
        .query_one((email, password_hash.to_string()), map_user_row)?;

    Ok(user)
}

/// Get the user with the specified `email` address.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if there is no user with the specified email,
/// - or [Error::SqlError] there is some other SQL error.
pub fn get_user_by_email(email: &str, connection: &Connection) -> Result<User, Error> {
    let user = connection
        .prepare("SELECT id, email, password, is_approved FROM user WHERE email = :email")?
        .query_one(&[(":email", &email)], map_user_row)?;

    Ok(user)
}

/// Retrieve all users in insertion order.
///
/// # Errors
/// This function will return an [Error::SqlError] if there is an SQL error.
pub fn list_users(connection: &Connection) -> Result<Vec<User>, Error> {
    connection
        .prepare("SELECT id, email, password, is_approved FROM user")?
        .query_map([], map_user_row)?
        .map(|maybe_user| maybe_user.map_err(Error::from))
        .collect()
}

/// Retrieve the users still waiting for administrator approval.
///
/// # Errors
/// This function will return an [Error::SqlError] if there is an SQL error.
pub fn list_pending_users(connection: &Connection) -> Result<Vec<User>, Error> {
    connection
        .prepare("SELECT id, email, password, is_approved FROM user WHERE is_approved = 0")?
        .query_map([], map_user_row)?
        .map(|maybe_user| maybe_user.map_err(Error::from))
        .collect()
}

/// Flip the approval flag of a user.
///
/// Approving an already-approved user is a no-op that still succeeds, so the
/// operation can be retried safely.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if `id` does not refer to a valid user,
/// - or [Error::SqlError] there is some other SQL error.
pub fn approve_user(id: UserId, connection: &Connection) -> Result<(), Error> {
    let rows_affected =
        connection.execute("UPDATE user SET is_approved = 1 WHERE id = :id", &[(":id", &id)])?;

    if rows_affected == 0 {
        return Err(Error::NotFound);
    }

    Ok(())
}

/// Delete a user from the database.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if `id` does not refer to a valid user,
/// - or [Error::SqlError] there is some other SQL error.
pub fn delete_user(id: UserId, connection: &Connection) -> Result<(), Error> {
    let rows_affected = connection.execute("DELETE FROM user WHERE id = :id", &[(":id", &id)])?;

    if rows_affected == 0 {
        return Err(Error::NotFound);
    }

    Ok(())
}

/// Create the user table in the database.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL
/// error.
pub fn create_user_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS user (
                id INTEGER PRIMARY KEY,
                email TEXT UNIQUE NOT NULL,
                password TEXT NOT NULL,
                is_approved INTEGER NOT NULL DEFAULT 0
                )",
        (),
    )?;

    Ok(())
}

/// Map a database row to a User.
pub fn map_user_row(row: &Row) -> Result<User, rusqlite::Error> {
    let id = row.get(0)?;
    let email = row.get(1)?;
    let raw_password_hash: String = row.get(2)?;
    let is_approved = row.get(3)?;

    Ok(User {
        id,
        email,
        password_hash: PasswordHash::new_unchecked(&raw_password_hash),
        is_approved,
    })
}

#[cfg(test)]
mod user_core_tests {
    use rusqlite::Connection;

    use crate::{Error, initialize_db, password::PasswordHash};

    use super::{
        Credentials, approve_user, create_user, delete_user, get_user_by_email,
        list_pending_users, list_users,
    };

    fn get_test_connection() -> Connection {
        let connection = Connection::open_in_memory().unwrap();
        initialize_db(&connection).unwrap();
        connection
    }

    fn test_hash() -> PasswordHash {
        PasswordHash::new_unchecked("$2b$04$notarealhashnotarealhash")
    }

    #[test]
    fn create_user_starts_unapproved() {
        let connection = get_test_connection();

        let user = create_user("foo@bar.baz", &test_hash(), &connection).unwrap();

        assert!(user.id > 0);
        assert!(!user.is_approved);
    }

    #[test]
    fn create_user_fails_on_duplicate_email() {
        let connection = get_test_connection();
        create_user("foo@bar.baz", &test_hash(), &connection).unwrap();

        let result = create_user("foo@bar.baz", &test_hash(), &connection);

        assert_eq!(result, Err(Error::DuplicateEmail));
    }

    #[test]
    fn get_user_by_email_finds_user() {
        let connection = get_test_connection();
        let created = create_user("foo@bar.baz", &test_hash(), &connection).unwrap();

        let selected = get_user_by_email("foo@bar.baz", &connection).unwrap();

        assert_eq!(selected, created);
    }

    #[test]
    fn get_user_by_email_fails_for_unknown_email() {
        let connection = get_test_connection();

        assert_eq!(
            get_user_by_email("nobody@bar.baz", &connection),
            Err(Error::NotFound)
        );
    }

    #[test]
    fn approve_user_flips_flag() {
        let connection = get_test_connection();
        let user = create_user("foo@bar.baz", &test_hash(), &connection).unwrap();

        approve_user(user.id, &connection).unwrap();

        let approved = get_user_by_email("foo@bar.baz", &connection).unwrap();
        assert!(approved.is_approved);
    }

    #[test]
    fn approving_twice_leaves_state_unchanged() {
        let connection = get_test_connection();
        let user = create_user("foo@bar.baz", &test_hash(), &connection).unwrap();

        approve_user(user.id, &connection).unwrap();
        approve_user(user.id, &connection).unwrap();

        let approved = get_user_by_email("foo@bar.baz", &connection).unwrap();
        assert!(approved.is_approved);
    }

    #[test]
    fn approve_fails_for_unknown_id() {
        let connection = get_test_connection();

        assert_eq!(approve_user(999, &connection), Err(Error::NotFound));
    }

    #[test]
    fn pending_listing_excludes_approved_users() {
        let connection = get_test_connection();
        let first = create_user("first@bar.baz", &test_hash(), &connection).unwrap();
        create_user("second@bar.baz", &test_hash(), &connection).unwrap();

        approve_user(first.id, &connection).unwrap();

        let pending = list_pending_users(&connection).unwrap();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].email, "second@bar.baz");

        assert_eq!(list_users(&connection).unwrap().len(), 2);
    }

    #[test]
    fn delete_missing_user_reports_not_found() {
        let connection = get_test_connection();

        assert_eq!(delete_user(999, &connection), Err(Error::NotFound));
    }

    #[test]
    fn credentials_require_both_fields() {
        let missing_email = Credentials {
            email: None,
            password: Some("hunter2".to_owned()),
        };
        assert_eq!(
            missing_email.into_parts().unwrap_err(),
            Error::MissingField("email")
        );

        let missing_password = Credentials {
            email: Some("foo@bar.baz".to_owned()),
            password: None,
        };
        assert_eq!(
            missing_password.into_parts().unwrap_err(),
            Error::MissingField("password")
        );
    }
}
