use super::backend::StorageBackend;
use super::codec;
use crate::error::{CadastroError, Result};
use crate::model::Record;
use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, BufWriter, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

pub const DEFAULT_FILE_NAME: &str = "pessoas.csv";

pub struct FsBackend {
    path: PathBuf,
}

impl FsBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or(DEFAULT_FILE_NAME);
        self.path
            .with_file_name(format!(".{}-{}.tmp", name, Uuid::new_v4()))
    }
}

impl StorageBackend for FsBackend {
    fn exists(&self) -> bool {
        self.path.exists()
    }

    fn initialize(&self) -> Result<()> {
        if self.exists() {
            return Ok(());
        }
        debug!(path = %self.path.display(), "creating record file");
        self.rewrite_all(&[])
    }

    fn read_all(&self) -> Result<Vec<Record>> {
        if !self.exists() {
            return Ok(Vec::new());
        }
        let file = File::open(&self.path)?;
        let records = codec::read_records(BufReader::new(file))?;
        debug!(path = %self.path.display(), rows = records.len(), "read record file");
        Ok(records)
    }

    fn rewrite_all(&self, records: &[Record]) -> Result<()> {
        self.ensure_parent()?;

        // Atomic write: tmp file next to the target, then rename over it
        let tmp_path = self.tmp_path();
        let written = File::create(&tmp_path)
            .map_err(CadastroError::from)
            .and_then(|file| codec::write_records(BufWriter::new(file), records));
        if let Err(e) = written {
            let _ = fs::remove_file(&tmp_path);
            return Err(e);
        }
        fs::rename(&tmp_path, &self.path)?;

        debug!(path = %self.path.display(), rows = records.len(), "rewrote record file");
        Ok(())
    }

    fn append(&self, record: &Record) -> Result<()> {
        self.initialize()?;
        let mut file = OpenOptions::new().read(true).append(true).open(&self.path)?;
        // a hand-edited file may lack the final line break
        if !ends_with_newline(&mut file)? {
            file.write_all(b"\r\n")?;
        }
        codec::write_row(BufWriter::new(file), record)?;
        debug!(path = %self.path.display(), id = record.id_text(), "appended record");
        Ok(())
    }

    fn location(&self) -> PathBuf {
        self.path.clone()
    }
}

fn ends_with_newline(file: &mut File) -> Result<bool> {
    if file.metadata()?.len() == 0 {
        return Ok(true);
    }
    file.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}
