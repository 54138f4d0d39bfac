//! CLI subcommand implementations

pub mod serve;
