//! Administrator accounts.
//!
//! At most [MAX_ADMIN_ACCOUNTS](core::MAX_ADMIN_ACCOUNTS) admins may exist
//! at a time, and the founding admin (the one with the lowest id) can never
//! be deleted.

mod core;
mod create_endpoint;
mod delete_endpoint;
mod list_endpoint;
mod log_in_endpoint;

pub use core::{
    Admin, MAX_ADMIN_ACCOUNTS, PublicAdmin, count_admins, create_admin, create_admin_table,
    delete_admin, get_admin_by_email, list_admins, map_admin_row,
};
pub use create_endpoint::create_admin_endpoint;
pub use delete_endpoint::delete_admin_endpoint;
pub use list_endpoint::get_admins_endpoint;
pub use log_in_endpoint::admin_log_in_endpoint;
