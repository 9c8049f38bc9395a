//! Persistence for the gate flag

use crate::GateError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

/// Where the gate flag lives between restarts
pub trait FlagStore: Send + Sync {
    /// Read the flag; an absent flag reads as `false`
    fn load(&self) -> Result<bool, GateError>;

    /// Write the flag
    fn save(&self, authenticated: bool) -> Result<(), GateError>;
}

/// Flag kept in process memory
#[derive(Debug, Default)]
pub struct MemoryFlagStore {
    flag: AtomicBool,
}

impl MemoryFlagStore {
    /// Create a store holding `false`
    pub fn new() -> Self {
        Self::default()
    }
}

impl FlagStore for MemoryFlagStore {
    fn load(&self) -> Result<bool, GateError> {
        Ok(self.flag.load(Ordering::SeqCst))
    }

    fn save(&self, authenticated: bool) -> Result<(), GateError> {
        self.flag.store(authenticated, Ordering::SeqCst);
        Ok(())
    }
}

#[derive(Serialize, Deserialize)]
struct FlagFile {
    batcoin_authenticated: bool,
}

/// Flag persisted as a small JSON file
#[derive(Debug, Clone)]
pub struct FileFlagStore {
    path: PathBuf,
}

impl FileFlagStore {
    /// Create a store backed by `path`; the file is created on first save
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FlagStore for FileFlagStore {
    fn load(&self) -> Result<bool, GateError> {
        if !self.path.exists() {
            return Ok(false);
        }
        let contents = std::fs::read_to_string(&self.path)?;
        let file: FlagFile = serde_json::from_str(&contents)?;
        Ok(file.batcoin_authenticated)
    }

    fn save(&self, authenticated: bool) -> Result<(), GateError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string(&FlagFile {
            batcoin_authenticated: authenticated,
        })?;
        std::fs::write(&self.path, contents)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_store() {
        let store = MemoryFlagStore::new();
        assert!(!store.load().unwrap());
        store.save(true).unwrap();
        assert!(store.load().unwrap());
    }

    #[test]
    fn test_file_store_missing_file_reads_false() {
        let dir = TempDir::new().unwrap();
        let store = FileFlagStore::new(dir.path().join("gate.json"));
        assert!(!store.load().unwrap());
    }

    #[test]
    fn test_file_store_survives_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("gate.json");

        FileFlagStore::new(&path).save(true).unwrap();
        assert!(FileFlagStore::new(&path).load().unwrap());

        FileFlagStore::new(&path).save(false).unwrap();
        assert!(!FileFlagStore::new(&path).load().unwrap());
    }

    #[test]
    fn test_file_store_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gate.json");
        std::fs::write(&path, "not json").unwrap();

        let result = FileFlagStore::new(&path).load();
        assert!(matches!(result, Err(GateError::Store(_))));
    }
}
