//! Registered user accounts and the approval workflow.
//!
//! A user registers unapproved and can only log in once an administrator has
//! flipped the approval flag.

mod approve_endpoint;
mod core;
mod delete_endpoint;
mod list_endpoint;
mod log_in_endpoint;
mod register_endpoint;

pub use approve_endpoint::approve_user_endpoint;
pub use core::{
    Credentials, PublicUser, User, approve_user, create_user, create_user_table, delete_user,
    get_user_by_email, list_pending_users, list_users, map_user_row,
};
pub use delete_endpoint::delete_user_endpoint;
pub use list_endpoint::{get_pending_users_endpoint, get_users_endpoint};
pub use log_in_endpoint::log_in_endpoint;
pub use register_endpoint::register_endpoint;
