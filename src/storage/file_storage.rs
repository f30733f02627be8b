// Disk-backed key-value storage (one JSON file of named text slots)
use std::collections::BTreeMap;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use chrono::{DateTime, Utc};
use crate::storage::StorageBackend;
use crate::{v_debug, v_info};

pub struct FileStorage {
    storage_path: PathBuf,
}

impl FileStorage {
    pub fn new(storage_path: impl AsRef<Path>) -> Self {
        Self {
            storage_path: storage_path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.storage_path
    }

    pub fn exists(&self) -> bool {
        self.storage_path.exists()
    }

    /// When the storage file was last written, if it exists
    pub fn last_modified(&self) -> Option<DateTime<Utc>> {
        fs::metadata(&self.storage_path)
            .and_then(|m| m.modified())
            .ok()
            .map(DateTime::<Utc>::from)
    }

    /// Every slot in the file. A missing file is empty; an unreadable or
    /// malformed one is treated the same way.
    pub fn slots(&self) -> BTreeMap<String, String> {
        match self.load_from_disk() {
            Ok(slots) => slots,
            Err(e) => {
                v_info!("⚠️ Failed to read storage file {}: {}", self.storage_path.display(), e);
                v_info!("💾 Treating storage as empty");
                BTreeMap::new()
            }
        }
    }

    fn load_from_disk(&self) -> Result<BTreeMap<String, String>, Box<dyn Error>> {
        if !self.storage_path.exists() {
            return Ok(BTreeMap::new()); // Nothing stored yet
        }

        let content = fs::read_to_string(&self.storage_path)?;
        let slots: BTreeMap<String, String> = serde_json::from_str(&content)?;
        v_debug!("💾 Loaded {} storage slots from {}", slots.len(), self.storage_path.display());
        Ok(slots)
    }

    fn save_to_disk(&self, slots: &BTreeMap<String, String>) -> Result<(), Box<dyn Error>> {
        let content = serde_json::to_string_pretty(slots)?;

        if let Some(parent) = self.storage_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&self.storage_path, content)?;
        Ok(())
    }
}

impl StorageBackend for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.slots().remove(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Box<dyn Error>> {
        let mut slots = self.slots();
        slots.insert(key.to_string(), value.to_string());
        self.save_to_disk(&slots)?;
        v_debug!("💾 Wrote slot '{}' to {}", key, self.storage_path.display());
        Ok(())
    }
}
