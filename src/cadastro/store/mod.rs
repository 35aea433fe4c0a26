//! # Storage Layer
//!
//! This module defines the storage abstraction for cadastro. The [`DataStore`]
//! trait is what the rest of the application talks to; it is implemented once,
//! by [`record_store::RecordStore`], which is generic over a
//! [`backend::StorageBackend`].
//!
//! ## Split of Responsibilities
//!
//! - **Backend** (`StorageBackend`): the "how". Reads every row, rewrites every
//!   row, appends one row. Knows about files (or memory), nothing about ids.
//! - **Store** (`RecordStore`): the "what". Id assignment, upsert, update and
//!   delete by id, all expressed as read-everything then rewrite-everything.
//!
//! A different backing (an embedded key-value store, say) only needs to
//! implement `StorageBackend`; callers do not change.
//!
//! ## Full-File Rewrite
//!
//! Every mutation reads the whole record set, changes it in memory and writes
//! the whole set back. There is no cache between calls: each operation opens,
//! reads or writes, and closes the file. Lookups are linear scans by id.
//! This is sized for a local address book, not for large data sets.
//!
//! Row order on read is always file order. Ids are not sorted.
//!
//! ## Concurrent Writers
//!
//! There is **no locking**. If two processes mutate the same file at the same
//! time, the last full rewrite wins and the other's change is silently lost.
//! That is accepted for a single-user tool; do not share a data file between
//! concurrent writers.
//!
//! ## Id Assignment
//!
//! New ids are `max(existing) + 1`, or `1` when empty. Ids freed by a delete
//! are reused only if they were the maximum: deleting the last record of an
//! otherwise empty file brings the next id back to `1`.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production CSV file (see [`codec`] for the format).
//! - [`memory::InMemoryStore`]: for testing logic without filesystem I/O.
//!
//! ## File Layout
//!
//! ```text
//! ID,Nome,Sobrenome,Rua,Numero,Bairro,Cidade,Estado,Pais,Telefone,E-mail
//! 1,Ana,Silva,,,,Recife,,,,
//! 2,Bruno,Costa,"Rua A, 10",,,,,,,bruno@example.com
//! ```

use crate::error::Result;
use crate::model::{PersonFields, Record};
use std::path::PathBuf;

pub mod backend;
pub mod codec;
pub mod fs;
pub mod fs_backend;
pub mod mem_backend;
pub mod memory;
pub mod record_store;

/// What a `save_or_update` call ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    Inserted,
    Updated,
}

/// Abstract interface for person-record storage.
pub trait DataStore {
    /// Create the backing file with its header if it does not exist yet.
    /// Returns true if it had to be created.
    fn ensure_initialized(&mut self) -> Result<bool>;

    /// All records, in file order.
    fn read_all(&self) -> Result<Vec<Record>>;

    /// First record whose id matches.
    fn find(&self, id: u64) -> Result<Option<Record>>;

    /// `max(id) + 1`, or 1 when there are no records.
    fn next_id(&self) -> Result<u64>;

    /// Insert under a freshly assigned id and return that id.
    fn save(&mut self, fields: &PersonFields) -> Result<u64>;

    /// Replace the record with this id, or append a new one.
    fn save_or_update(&mut self, id: u64, fields: &PersonFields) -> Result<Upsert>;

    /// Replace the first record with this id. Returns false, and leaves the
    /// file untouched, if no record has this id.
    fn update(&mut self, id: u64, fields: &PersonFields) -> Result<bool>;

    /// Remove every record with this id. Returns how many were removed.
    fn delete(&mut self, id: u64) -> Result<usize>;

    /// Replace the whole record set, keeping the given order.
    fn rewrite_all(&mut self, records: &[Record]) -> Result<()>;

    /// Where the records live (a real path for files, a virtual one otherwise).
    fn location(&self) -> PathBuf;
}
