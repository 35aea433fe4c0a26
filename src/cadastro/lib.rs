//! # Cadastro Architecture
//!
//! Cadastro keeps a list of people (name, address, phone, email) in a single
//! CSV file. It is a library with a CLI client on top; another front end
//! (a GUI form, a web page) would talk to the same API.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prints listings, handles exit codes    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, parses user-typed ids         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Validates input, calls the store, re-reads the listing   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait, RecordStore over a StorageBackend       │
//! │  - FileStore (CSV file), InMemoryStore (testing)            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No Terminal I/O in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never exits
//! the process. Diagnostics go through `tracing`; the binary decides whether
//! and where to show them (see [`logging`]).
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Controller logic for each operation
//! - [`store`]: Storage abstraction, CSV codec and backends
//! - [`model`]: `Record`, `Person`, `PersonFields` and the column layout
//! - [`validation`]: Input rules applied before saving
//! - [`config`]: Configuration file
//! - [`logging`]: Subscriber setup for the binary
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod store;
pub mod validation;
