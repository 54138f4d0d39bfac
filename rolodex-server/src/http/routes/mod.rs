//! Route handlers organized by surface

pub mod api;
pub mod common;
pub mod health;
pub mod pages;
