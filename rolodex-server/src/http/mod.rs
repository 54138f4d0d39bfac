//! HTTP layer: router, error mapping, views, and route handlers

pub mod error;
pub mod routes;
pub mod server;
pub mod views;

pub use error::ApiError;
pub use server::{build_router, run_server, AppState, ServerConfig};
