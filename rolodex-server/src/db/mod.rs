//! Database access: pool creation, schema setup, and the user repository

pub mod pool;
pub mod schema;
pub mod users;

pub use pool::create_pool;
pub use users::{DbError, User, UserRepo};
