use crate::error::Result;
use crate::model::Record;
use std::path::PathBuf;

/// Abstract interface for raw record I/O.
/// This trait handles the "how" of storage (file vs memory),
/// while RecordStore handles the "what" (ids, upsert, delete).
pub trait StorageBackend {
    /// Whether the backing exists at all (a header-only file counts).
    fn exists(&self) -> bool;

    /// Create an empty backing holding only the header.
    /// Must not touch an existing backing.
    fn initialize(&self) -> Result<()>;

    /// Every row after the header, in stored order.
    /// A missing backing reads as empty.
    fn read_all(&self) -> Result<Vec<Record>>;

    /// Truncate and write the header followed by `records`.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn rewrite_all(&self, records: &[Record]) -> Result<()>;

    /// Add one row at the end, creating the backing first if needed.
    fn append(&self, record: &Record) -> Result<()>;

    /// Path of the backing. For MemBackend, a virtual path.
    fn location(&self) -> PathBuf;
}
