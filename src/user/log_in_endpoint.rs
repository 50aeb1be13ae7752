//! Defines the endpoint for logging in a user.

use axum::{Json, extract::State};
use serde_json::{Value, json};

use crate::{
    AppState, Error,
    user::{Credentials, get_user_by_email},
};

/// A route handler for user log-in.
///
/// The checks run in a fixed order: an unknown email responds with a 401, an
/// unapproved account with a 403, and a wrong password with a 401. No
/// session or token is issued; the response only confirms the credentials.
pub async fn log_in_endpoint(
    State(state): State<AppState>,
    Json(credentials): Json<Credentials>,
) -> Result<Json<Value>, Error> {
    let (email, password) = credentials.into_parts()?;

    let user = {
        let connection = state
            .db_connection
            .lock()
            .map_err(|_| Error::DatabaseLockError)?;

        get_user_by_email(&email, &connection).map_err(|error| match error {
            Error::NotFound => Error::InvalidCredentials,
            error => error,
        })?
    };

    if !user.is_approved {
        return Err(Error::AccountNotApproved);
    }

    if !user.password_hash.verify(&password)? {
        return Err(Error::InvalidCredentials);
    }

    Ok(Json(json!({
        "message": "login successful",
        "user": user.to_public()
    })))
}
