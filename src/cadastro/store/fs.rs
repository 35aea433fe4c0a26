use super::fs_backend::FsBackend;
use super::record_store::RecordStore;
use std::path::{Path, PathBuf};

pub type FileStore = RecordStore<FsBackend>;

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        RecordStore::with_backend(FsBackend::new(path))
    }

    pub fn path(&self) -> &Path {
        self.backend.path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PersonFields, HEADER};
    use crate::store::DataStore;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn init_writes_exact_header_row() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().join("pessoas.csv"));

        assert!(store.ensure_initialized().unwrap());

        let text = fs::read_to_string(store.path()).unwrap();
        let first_line = text.lines().next().unwrap();
        assert_eq!(first_line, HEADER.join(","));
        assert!(store.read_all().unwrap().is_empty());
    }

    #[test]
    fn mutations_survive_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pessoas.csv");

        let mut store = FileStore::new(&path);
        store.ensure_initialized().unwrap();
        store.save(&PersonFields::new("Ana", "Silva")).unwrap();
        store.save(&PersonFields::new("Bia", "Souza")).unwrap();
        store.delete(1).unwrap();

        let reopened = FileStore::new(&path);
        let records = reopened.read_all().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].fields().first_name, "Bia");
        assert_eq!(reopened.next_id().unwrap(), 3);
    }
}
