//! CLI module
//!
//! Command-line interface over a configured resource handler.
//!
//! # Commands
//!
//! - `get` - Fetch one resource
//! - `list` - Walk a paginated collection
//! - `create` - POST a JSON document
//! - `put` / `delete` / `check` - Boolean mutations expecting 204

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::Runner;
