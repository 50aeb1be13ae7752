//! The API endpoint URIs.
//!
//! For endpoints that take a parameter, e.g., '/transactions/{id}', use
//! [format_endpoint].

/// The route to list and create transactions.
pub const TRANSACTIONS: &str = "/transactions";
/// The route to access a single transaction.
pub const TRANSACTION: &str = "/transactions/{id}";
/// The route to list and create activities.
///
/// The path spelling matches the original public API of the service.
pub const ACTIVITIES: &str = "/activites";
/// The route to access a single activity.
pub const ACTIVITY: &str = "/activites/{id}";
/// The route for registering a new (unapproved) user account.
pub const REGISTER: &str = "/register";
/// The route for logging in a user.
pub const LOG_IN: &str = "/login";
/// The route to list all users.
pub const USERS: &str = "/users";
/// The route to list users awaiting approval.
pub const PENDING_USERS: &str = "/users/pending";
/// The route to approve a registered user.
pub const APPROVE_USER: &str = "/users/{id}/approve";
/// The route to delete a user.
pub const USER: &str = "/users/{id}";
/// The route to list and create administrators.
pub const ADMINS: &str = "/admins";
/// The route for logging in an administrator.
pub const ADMIN_LOG_IN: &str = "/admins/login";
/// The route to delete an administrator.
pub const ADMIN: &str = "/admins/{id}";
/// The route for the day-by-day running balance report.
pub const DAILY_REPORT: &str = "/reports/daily";
/// The route for the period summary report.
pub const SUMMARY_REPORT: &str = "/reports/summary";
/// The route for the weekly/monthly/yearly chart series.
pub const TIMEFRAME_REPORT: &str = "/reports/timeframe/{timeframe}";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/users/{id}', '{id}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let mut param_start = None;
    let mut param_end = None;

    for (i, c) in endpoint_path.chars().enumerate() {
        if c == '{' {
            param_start = Some(i);
        } else if param_start.is_some() && c == '}' {
            param_end = Some(i + 1);
            break;
        }
    }

    let param_start = match param_start {
        Some(start) => start,
        None => return endpoint_path.to_string(),
    };

    let param_end = param_end.unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
