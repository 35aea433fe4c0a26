use super::backend::StorageBackend;
use super::{DataStore, Upsert};
use crate::error::{CadastroError, Result};
use crate::model::{PersonFields, Record};
use std::path::PathBuf;
use tracing::{debug, info};

pub struct RecordStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
}

impl<B: StorageBackend> RecordStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Position of the first record with this id.
    /// Fails on the first unparseable id met before a match.
    fn position_of(records: &[Record], id: u64) -> Result<Option<usize>> {
        for (i, record) in records.iter().enumerate() {
            if record.id()? == id {
                return Ok(Some(i));
            }
        }
        Ok(None)
    }
}

impl<B: StorageBackend> DataStore for RecordStore<B> {
    fn ensure_initialized(&mut self) -> Result<bool> {
        if self.backend.exists() {
            return Ok(false);
        }
        self.backend.initialize()?;
        info!(location = %self.backend.location().display(), "initialized record store");
        Ok(true)
    }

    fn read_all(&self) -> Result<Vec<Record>> {
        self.backend.read_all()
    }

    fn find(&self, id: u64) -> Result<Option<Record>> {
        let mut records = self.backend.read_all()?;
        Ok(Self::position_of(&records, id)?.map(|i| records.swap_remove(i)))
    }

    fn next_id(&self) -> Result<u64> {
        let records = self.backend.read_all()?;
        let mut max: Option<u64> = None;
        for record in &records {
            max = max.max(Some(record.id()?));
        }
        match max {
            None => Ok(1),
            Some(m) => m
                .checked_add(1)
                .ok_or_else(|| CadastroError::InvalidId(m.to_string())),
        }
    }

    fn save(&mut self, fields: &PersonFields) -> Result<u64> {
        let id = self.next_id()?;
        self.save_or_update(id, fields)?;
        Ok(id)
    }

    fn save_or_update(&mut self, id: u64, fields: &PersonFields) -> Result<Upsert> {
        let mut records = self.backend.read_all()?;

        if let Some(i) = Self::position_of(&records, id)? {
            records[i] = records[i].replaced_with(fields);
            self.backend.rewrite_all(&records)?;
            info!(id, rows = records.len(), "updated record in place");
            return Ok(Upsert::Updated);
        }

        self.backend.append(&Record::new(id, fields))?;
        info!(id, rows = records.len() + 1, "appended record");
        Ok(Upsert::Inserted)
    }

    fn update(&mut self, id: u64, fields: &PersonFields) -> Result<bool> {
        let mut records = self.backend.read_all()?;

        let Some(i) = Self::position_of(&records, id)? else {
            debug!(id, "update skipped, no record with this id");
            return Ok(false);
        };

        records[i] = records[i].replaced_with(fields);
        self.backend.rewrite_all(&records)?;
        info!(id, rows = records.len(), "updated record");
        Ok(true)
    }

    fn delete(&mut self, id: u64) -> Result<usize> {
        let records = self.backend.read_all()?;
        let before = records.len();

        let mut kept = Vec::with_capacity(before);
        for record in records {
            if record.id()? != id {
                kept.push(record);
            }
        }

        self.backend.rewrite_all(&kept)?;
        let removed = before - kept.len();
        info!(id, removed, rows = kept.len(), "deleted records");
        Ok(removed)
    }

    fn rewrite_all(&mut self, records: &[Record]) -> Result<()> {
        self.backend.rewrite_all(records)?;
        debug!(rows = records.len(), "rewrote record set");
        Ok(())
    }

    fn location(&self) -> PathBuf {
        self.backend.location()
    }
}
