//! File storage for the data directory.
//!
//! Directory structure:
//! ~/.cashplan/
//!   rules.yaml           # rule set + dashboard preferences
//!   cashplan.log         # rotating log (written by the logging module)

use std::fs;
use std::path::{Path, PathBuf};

use crate::util::io::atomic_write;

use super::app_data::AppData;

/// Error types for storage operations
#[derive(Debug)]
pub enum StorageError {
    Io(String),
    Parse(String),
    Serialize(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Io(msg) => write!(f, "IO error: {}", msg),
            StorageError::Parse(msg) => write!(f, "Parse error: {}", msg),
            StorageError::Serialize(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

/// Manages the data directory holding the persisted rule set.
pub struct DataDirectory {
    root: PathBuf,
}

impl DataDirectory {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Default data directory path (~/.cashplan/)
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".cashplan")
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn rules_path(&self) -> PathBuf {
        self.root.join("rules.yaml")
    }

    pub fn exists(&self) -> bool {
        self.rules_path().exists()
    }

    /// Create the directory structure if missing.
    pub fn init(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root)
            .map_err(|e| StorageError::Io(format!("Failed to create data directory: {}", e)))
    }

    /// Load persisted data, falling back to defaults when nothing is saved yet.
    pub fn load(&self) -> Result<AppData, StorageError> {
        let path = self.rules_path();
        if !path.exists() {
            return Ok(AppData::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| StorageError::Io(format!("Failed to read {}: {}", path.display(), e)))?;

        AppData::from_yaml(&content)
            .map_err(|e| StorageError::Parse(format!("Failed to parse {}: {}", path.display(), e)))
    }

    /// Persist the rule set and dashboard preferences.
    pub fn save(&self, data: &AppData) -> Result<(), StorageError> {
        self.init()?;

        let yaml = data
            .to_yaml()
            .map_err(|e| StorageError::Serialize(format!("Failed to serialize rules: {}", e)))?;

        atomic_write(&self.rules_path(), &yaml)
            .map_err(|e| StorageError::Io(format!("Failed to write rules: {}", e)))
    }
}
