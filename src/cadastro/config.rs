use crate::error::Result;
use crate::store::fs_backend::DEFAULT_FILE_NAME;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

pub const KEYS: [&str; 1] = ["data-file"];

/// Configuration for cadastro, stored as config.json in the config dir
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct CadastroConfig {
    /// Path of the CSV data file. Relative paths are taken from the working directory.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_FILE_NAME)
}

impl Default for CadastroConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
        }
    }
}

impl CadastroConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: CadastroConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "data-file" => Some(self.data_file.display().to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "data-file" => {
                if value.trim().is_empty() {
                    return Err("data-file cannot be empty".to_string());
                }
                self.data_file = PathBuf::from(value);
                Ok(())
            }
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }

    /// The data file as an absolute path, relative ones joined onto `cwd`.
    pub fn resolve_data_file(&self, cwd: &Path) -> PathBuf {
        if self.data_file.is_absolute() {
            self.data_file.clone()
        } else {
            cwd.join(&self.data_file)
        }
    }
}
