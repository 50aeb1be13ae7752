//! Application router configuration.

use axum::{
    Json, Router,
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
};
use serde_json::json;

use crate::{
    AppState,
    activity::{
        create_activity_endpoint, delete_activity_endpoint, get_activities_endpoint,
        get_activity_endpoint, update_activity_endpoint,
    },
    admin::{
        admin_log_in_endpoint, create_admin_endpoint, delete_admin_endpoint, get_admins_endpoint,
    },
    endpoints,
    logging::logging_middleware,
    report::{get_daily_report, get_summary_report, get_timeframe_report},
    transaction::{
        create_transaction_endpoint, delete_transaction_endpoint, get_transaction_endpoint,
        get_transactions_endpoint, update_transaction_endpoint,
    },
    user::{
        approve_user_endpoint, delete_user_endpoint, get_pending_users_endpoint,
        get_users_endpoint, log_in_endpoint, register_endpoint,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            endpoints::TRANSACTIONS,
            get(get_transactions_endpoint).post(create_transaction_endpoint),
        )
        .route(
            endpoints::TRANSACTION,
            get(get_transaction_endpoint)
                .put(update_transaction_endpoint)
                .delete(delete_transaction_endpoint),
        )
        .route(
            endpoints::ACTIVITIES,
            get(get_activities_endpoint).post(create_activity_endpoint),
        )
        .route(
            endpoints::ACTIVITY,
            get(get_activity_endpoint)
                .put(update_activity_endpoint)
                .delete(delete_activity_endpoint),
        )
        .route(endpoints::REGISTER, post(register_endpoint))
        .route(endpoints::LOG_IN, post(log_in_endpoint))
        .route(endpoints::USERS, get(get_users_endpoint))
        .route(endpoints::PENDING_USERS, get(get_pending_users_endpoint))
        .route(endpoints::APPROVE_USER, put(approve_user_endpoint))
        .route(endpoints::USER, delete(delete_user_endpoint))
        .route(
            endpoints::ADMINS,
            get(get_admins_endpoint).post(create_admin_endpoint),
        )
        .route(endpoints::ADMIN_LOG_IN, post(admin_log_in_endpoint))
        .route(endpoints::ADMIN, delete(delete_admin_endpoint))
        .route(endpoints::DAILY_REPORT, get(get_daily_report))
        .route(endpoints::SUMMARY_REPORT, get(get_summary_report))
        .route(endpoints::TIMEFRAME_REPORT, get(get_timeframe_report))
        .layer(middleware::from_fn(logging_middleware))
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The JSON body served for unknown routes.
async fn get_404_not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "the requested resource could not be found" })),
    )
        .into_response()
}
