//! Caisse is a web service for managing a small clinic's finances: money
//! flows (transactions), scheduled activities, and the accounts that are
//! allowed to see them.
//!
//! This library provides a JSON REST API. Reporting views (daily balances,
//! period summaries, timeframe charts) are computed server-side so that
//! clients only ever render already-aggregated data.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use serde_json::json;
use tokio::signal;

mod activity;
mod admin;
mod app_state;
mod database_id;
mod db;
pub mod endpoints;
mod logging;
mod password;
mod report;
mod routing;
mod transaction;
mod user;

pub use app_state::AppState;
pub use db::initialize as initialize_db;
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use password::PasswordHash;
pub use routing::build_router;

/// An async task that waits for either the ctrl+c or terminate signal,
/// whichever comes first, and then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A required field was absent (or empty) in the request body.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// The category value was not one of the accepted enumeration values.
    #[error("category must be either \"depense\" or \"revenu\"")]
    InvalidCategory,

    /// A transaction must represent a non-zero flow of money.
    #[error("amount must be a non-zero number")]
    ZeroAmount,

    /// A month query parameter was outside 1-12.
    #[error("month must be between 1 and 12")]
    InvalidMonth,

    /// An activity status query parameter was not a known status.
    #[error("status must be one of \"upcoming\", \"ongoing\" or \"finished\"")]
    InvalidStatus,

    /// The email address is already registered.
    #[error("the email address is already registered")]
    DuplicateEmail,

    /// The fixed cap on concurrent administrator accounts was hit.
    #[error("maximum number of administrators reached (3)")]
    AdminLimitReached,

    /// The founding administrator account cannot be deleted.
    #[error("the founding administrator cannot be deleted")]
    ProtectedAdmin,

    /// The email/password combination did not match an account.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The account exists but has not been approved by an administrator yet.
    #[error("account is awaiting administrator approval")]
    AccountNotApproved,

    /// The requested resource was not found.
    ///
    /// For HTTP request handlers, the client should check that the parameters
    /// (e.g., ID) are correct and that the resource has been created.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// An unexpected error occurred with the underlying hashing library.
    ///
    /// The error string should only be logged for debugging on the server.
    /// When communicating with the application client this error should be
    /// replaced with a general error type indicating an internal server error.
    #[error("hashing failed: {0}")]
    HashingError(String),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            // Code 2067 occurs when a UNIQUE constraint failed.
            rusqlite::Error::SqliteFailure(sql_error, Some(ref desc))
                if sql_error.extended_code == 2067 && desc.contains("email") =>
            {
                Error::DuplicateEmail
            }
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::MissingField(_)
            | Error::InvalidCategory
            | Error::ZeroAmount
            | Error::InvalidMonth
            | Error::InvalidStatus
            | Error::DuplicateEmail
            | Error::AdminLimitReached
            | Error::ProtectedAdmin => StatusCode::BAD_REQUEST,
            Error::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Error::AccountNotApproved => StatusCode::FORBIDDEN,
            Error::NotFound => StatusCode::NOT_FOUND,
            Error::HashingError(_) | Error::DatabaseLockError | Error::SqlError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Internal errors are logged on the server and replaced with a
        // generic message so no database detail leaks to the client.
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("An unexpected error occurred: {}", self);
            "an internal error occurred".to_owned()
        } else {
            self.to_string()
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
