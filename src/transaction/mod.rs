//! Money flow records (expenses and revenues) and their CRUD endpoints.

mod category;
mod core;
mod create_endpoint;
mod delete_endpoint;
mod list_endpoint;
mod update_endpoint;

pub use category::Category;
pub use core::{
    Transaction, TransactionBuilder, TransactionData, create_transaction,
    create_transaction_table, delete_transaction, get_transaction, list_transactions,
    map_transaction_row, update_transaction,
};
pub use create_endpoint::create_transaction_endpoint;
pub use delete_endpoint::delete_transaction_endpoint;
pub use list_endpoint::{get_transaction_endpoint, get_transactions_endpoint};
pub use update_endpoint::update_transaction_endpoint;
