use super::backend::StorageBackend;
use crate::error::{CadastroError, Result};
use crate::model::Record;
use std::cell::RefCell;
use std::path::PathBuf;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since cadastro is single-threaded.
/// `None` stands for "file not created yet".
#[derive(Default)]
pub struct MemBackend {
    rows: RefCell<Option<Vec<Record>>>,
    simulate_write_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts out as if the file already held these rows.
    pub fn with_records(records: Vec<Record>) -> Self {
        Self {
            rows: RefCell::new(Some(records)),
            ..Self::default()
        }
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    fn check_writable(&self) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(CadastroError::Store("Simulated write error".to_string()));
        }
        Ok(())
    }
}

impl StorageBackend for MemBackend {
    fn exists(&self) -> bool {
        self.rows.borrow().is_some()
    }

    fn initialize(&self) -> Result<()> {
        if self.exists() {
            return Ok(());
        }
        self.check_writable()?;
        *self.rows.borrow_mut() = Some(Vec::new());
        Ok(())
    }

    fn read_all(&self) -> Result<Vec<Record>> {
        Ok(self.rows.borrow().clone().unwrap_or_default())
    }

    fn rewrite_all(&self, records: &[Record]) -> Result<()> {
        self.check_writable()?;
        *self.rows.borrow_mut() = Some(records.to_vec());
        Ok(())
    }

    fn append(&self, record: &Record) -> Result<()> {
        self.check_writable()?;
        self.rows
            .borrow_mut()
            .get_or_insert_with(Vec::new)
            .push(record.clone());
        Ok(())
    }

    fn location(&self) -> PathBuf {
        PathBuf::from("memory://pessoas.csv")
    }
}
