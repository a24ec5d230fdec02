use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::Mutex;

use super::{RecordStore, StoreError};

// In-memory stand-in for FileStore so ledger and route tests never touch
// the real filesystem.
#[derive(Default)]
pub struct MemoryStore {
    collections: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn read(&self, collection: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.collections.lock().get(collection).cloned())
    }

    async fn write(&self, collection: &str, bytes: Vec<u8>) -> Result<(), StoreError> {
        self.collections.lock().insert(collection.to_string(), bytes);
        Ok(())
    }
}
