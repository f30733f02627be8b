// Key-value storage seam behind the history store
use std::collections::HashMap;
use std::error::Error;

/// Text key-value storage in the shape of a browser's per-origin local
/// storage. Reads never fail; a missing or unreadable slot is `None`.
pub trait StorageBackend {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), Box<dyn Error>>;
}

/// In-process storage, used for tests and for short-lived sessions
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with a single slot
    pub fn with_slot(key: &str, value: &str) -> Self {
        let mut storage = Self::new();
        storage.slots.insert(key.to_string(), value.to_string());
        storage
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.slots.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Box<dyn Error>> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<S: StorageBackend + ?Sized> StorageBackend for &mut S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Box<dyn Error>> {
        (**self).set(key, value)
    }
}
