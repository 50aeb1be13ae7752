//! Type aliases for database row IDs.
//!
//! Using one alias per entity keeps function signatures self-documenting
//! without the ceremony of newtype wrappers.

/// The integer type underlying all row IDs.
pub type DatabaseId = i64;

/// The ID of a row in the transaction table.
pub type TransactionId = DatabaseId;

/// The ID of a row in the activity table.
pub type ActivityId = DatabaseId;

/// The ID of a row in the user table.
pub type UserId = DatabaseId;

/// The ID of a row in the admin table.
pub type AdminId = DatabaseId;
