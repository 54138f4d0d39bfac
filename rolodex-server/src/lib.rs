//! rolodex-server: users CRUD over HTML pages and a JSON API
//!
//! A single `users` table exposed two ways:
//! - server-rendered pages for listing, adding, and editing records
//! - a parallel JSON API under `/api`
//!
//! Every route is a thin pass-through from handler to one parameterized
//! query. No auth, no pagination, no validation layer.

pub mod db;
pub mod http;

pub use db::{create_pool, DbError, User, UserRepo};
pub use http::{run_server, AppState, ServerConfig};
