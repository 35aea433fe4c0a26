//! # CLI Layer
//!
//! This module is **one possible UI client** for cadastro. It stands where a
//! form window would: it collects field values, hands them to the API and
//! shows the refreshed listing after every change.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Uses `std::process::exit`
//! - Handles argument parsing
//! - Installs a `tracing` subscriber
//!
//! ## Structure
//!
//! - `args`: clap definitions
//! - `commands`: `run()`, context setup and one `handle_*` per subcommand
//! - `print`: output formatting

mod args;
mod commands;
mod print;

pub use commands::run;
