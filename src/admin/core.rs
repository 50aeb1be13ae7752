//! Defines the core data models and database queries for administrators.

use rusqlite::{Connection, Row};
use serde::{Deserialize, Serialize};

use crate::{Error, database_id::AdminId, password::PasswordHash};

/// The maximum number of concurrent administrator accounts.
pub const MAX_ADMIN_ACCOUNTS: usize = 3;

// ============================================================================
// MODELS
// ============================================================================

/// An administrator of the application.
///
/// Like [User](crate::user::User), this type is never serialized directly;
/// responses use [PublicAdmin].
#[derive(Debug, Clone, PartialEq)]
pub struct Admin {
    /// The admin's ID in the database.
    pub id: AdminId,
    /// The email address associated with the admin.
    pub email: String,
    /// The admin's password hash.
    pub password_hash: PasswordHash,
}

impl Admin {
    /// The client-safe view of this admin.
    pub fn to_public(&self) -> PublicAdmin {
        PublicAdmin {
            id: self.id,
            email: self.email.clone(),
        }
    }
}

/// An admin as served to clients: the id and email only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicAdmin {
    /// The admin's ID in the database.
    pub id: AdminId,
    /// The email address associated with the admin.
    pub email: String,
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

/// Create a new administrator account.
///
/// # Errors
/// This function will return a:
/// - [Error::AdminLimitReached] if [MAX_ADMIN_ACCOUNTS] accounts already
///   exist,
/// - [Error::DuplicateEmail] if the email address is already registered,
/// - or [Error::SqlError] there is some other SQL error.
pub fn create_admin(
    email: &str,
    password_hash: &PasswordHash,
    connection: &Connection,
) -> Result<Admin, Error> {
    if count_admins(connection)? >= MAX_ADMIN_ACCOUNTS {
        return Err(Error::AdminLimitReached);
    }

    let admin = connection
        .prepare(
            "INSERT INTO admin (email, password) VALUES (?1, ?2)
             RETURNING id, email, password",
        )?
        .query_one((email, password_hash.to_string()), map_admin_row)?;

    Ok(admin)
}

/// Get the admin with the specified `email` address.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if there is no admin with the specified email,
/// - or [Error::SqlError] there is some other SQL error.
pub fn get_admin_by_email(email: &str, connection: &Connection) -> Result<Admin, Error> {
    let admin = connection
        .prepare("SELECT id, email, password FROM admin WHERE email = :email")?
        .query_one(&[(":email", &email)], map_admin_row)?;

    Ok(admin)
}

/// Retrieve all admins in insertion order.
///
/// # Errors
/// This function will return an [Error::SqlError] if there is an SQL error.
pub fn list_admins(connection: &Connection) -> Result<Vec<Admin>, Error> {
    connection
        .prepare("SELECT id, email, password FROM admin")?
        .query_map([], map_admin_row)?
        .map(|maybe_admin| maybe_admin.map_err(Error::from))
        .collect()
}

/// Get the total number of administrator accounts.
///
/// # Errors
/// This function will return an [Error::SqlError] if there is an SQL error.
pub fn count_admins(connection: &Connection) -> Result<usize, Error> {
    connection
        .query_row("SELECT COUNT(id) FROM admin;", [], |row| {
            row.get::<_, i64>(0)
        })
        .map(|count| count as usize)
        .map_err(|error| error.into())
}

/// Delete an administrator account.
///
/// The founding admin is the account with the lowest id; it can never be
/// deleted. The lowest id is used instead of the admin's position in a
/// listing since the store does not guarantee a stable list order.
///
/// # Errors
/// This function will return a:
/// - [Error::ProtectedAdmin] if `id` refers to the founding admin,
/// - [Error::NotFound] if `id` does not refer to a valid admin,
/// - or [Error::SqlError] there is some other SQL error.
pub fn delete_admin(id: AdminId, connection: &Connection) -> Result<(), Error> {
    let founding_id: Option<AdminId> =
        connection.query_row("SELECT MIN(id) FROM admin;", [], |row| row.get(0))?;

    if founding_id == Some(id) {
        return Err(Error::ProtectedAdmin);
    }

    let rows_affected = connection.execute("DELETE FROM admin WHERE id = :id", &[(":id", &id)])?;

    if rows_affected == 0 {
        return Err(Error::NotFound);
    }

    Ok(())
}

/// Create the admin table in the database.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL
/// error.
pub fn create_admin_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS admin (
                id INTEGER PRIMARY KEY,
                email TEXT UNIQUE NOT NULL,
                password TEXT NOT NULL
                )",
        (),
    )?;

    Ok(())
}

/// Map a database row to an Admin.
pub fn map_admin_row(row: &Row) -> Result<Admin, rusqlite::Error> {
    let id = row.get(0)?;
    let email = row.get(1)?;
    let raw_password_hash: String = row.get(2)?;

    Ok(Admin {
        id,
        email,
        password_hash: PasswordHash::new_unchecked(&raw_password_hash),
    })
}

#[cfg(test)]
mod admin_core_tests {
    use rusqlite::Connection;

    use crate::{Error, initialize_db, password::PasswordHash};

    use super::{
        MAX_ADMIN_ACCOUNTS, count_admins, create_admin, delete_admin, get_admin_by_email,
        list_admins,
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
    fn create_admin_assigns_id() {
        let connection = get_test_connection();

        let admin = create_admin("root@clinic.test", &test_hash(), &connection).unwrap();

        assert!(admin.id > 0);
        assert_eq!(admin.email, "root@clinic.test");
    }

    #[test]
    fn create_admin_fails_on_duplicate_email() {
        let connection = get_test_connection();
        create_admin("root@clinic.test", &test_hash(), &connection).unwrap();

        let result = create_admin("root@clinic.test", &test_hash(), &connection);

        assert_eq!(result, Err(Error::DuplicateEmail));
    }

    #[test]
    fn create_admin_fails_once_limit_reached() {
        let connection = get_test_connection();

        for i in 0..MAX_ADMIN_ACCOUNTS {
            create_admin(&format!("admin{i}@clinic.test"), &test_hash(), &connection).unwrap();
        }

        let result = create_admin("extra@clinic.test", &test_hash(), &connection);

        assert_eq!(result, Err(Error::AdminLimitReached));
        assert_eq!(count_admins(&connection).unwrap(), MAX_ADMIN_ACCOUNTS);
    }

    #[test]
    fn founding_admin_cannot_be_deleted() {
        let connection = get_test_connection();
        let founding = create_admin("root@clinic.test", &test_hash(), &connection).unwrap();
        let second = create_admin("second@clinic.test", &test_hash(), &connection).unwrap();

        assert_eq!(
            delete_admin(founding.id, &connection),
            Err(Error::ProtectedAdmin)
        );

        delete_admin(second.id, &connection).unwrap();
        assert_eq!(list_admins(&connection).unwrap().len(), 1);
    }

    #[test]
    fn protection_follows_lowest_id_not_list_position() {
        let connection = get_test_connection();
        let founding = create_admin("root@clinic.test", &test_hash(), &connection).unwrap();
        let second = create_admin("second@clinic.test", &test_hash(), &connection).unwrap();

        // Removing and replacing the second admin must not move protection.
        delete_admin(second.id, &connection).unwrap();
        let third = create_admin("third@clinic.test", &test_hash(), &connection).unwrap();

        assert_eq!(
            delete_admin(founding.id, &connection),
            Err(Error::ProtectedAdmin)
        );
        delete_admin(third.id, &connection).unwrap();
    }

    #[test]
    fn delete_missing_admin_reports_not_found() {
        let connection = get_test_connection();
        create_admin("root@clinic.test", &test_hash(), &connection).unwrap();

        assert_eq!(delete_admin(999, &connection), Err(Error::NotFound));
    }

    #[test]
    fn get_admin_by_email_finds_admin() {
        let connection = get_test_connection();
        let created = create_admin("root@clinic.test", &test_hash(), &connection).unwrap();

        assert_eq!(
            get_admin_by_email("root@clinic.test", &connection),
            Ok(created)
        );
    }
}
