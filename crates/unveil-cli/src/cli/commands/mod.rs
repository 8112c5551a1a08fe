//! CLI command handlers.

pub mod config;
pub mod lines;
pub mod print;
pub mod read;
