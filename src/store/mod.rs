mod file;
#[cfg(test)]
mod memory;

pub use file::FileStore;
#[cfg(test)]
pub use memory::MemoryStore;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

// Whole-collection persistence. Implementations hand back raw bytes so the
// generic load/save helpers own the JSON framing.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn read(&self, collection: &str) -> Result<Option<Vec<u8>>, StoreError>;
    async fn write(&self, collection: &str, bytes: Vec<u8>) -> Result<(), StoreError>;
}

// A missing or unreadable collection loads as empty, which makes the store
// self-initializing on first use.
pub async fn load<T: DeserializeOwned>(store: &dyn RecordStore, collection: &str) -> Vec<T> {
    match store.read(collection).await {
        Ok(Some(bytes)) => match serde_json::from_slice(&bytes) {
            Ok(records) => records,
            Err(e) => {
                warn!("Collection '{}' is not parseable, treating as empty: {}", collection, e);
                Vec::new()
            }
        },
        Ok(None) => Vec::new(),
        Err(e) => {
            warn!("Collection '{}' is not readable, treating as empty: {}", collection, e);
            Vec::new()
        }
    }
}

// Full overwrite of the backing collection; not incremental and not
// crash-atomic.
pub async fn save<T: Serialize>(
    store: &dyn RecordStore,
    collection: &str,
    records: &[T],
) -> Result<(), StoreError> {
    let bytes = serde_json::to_vec_pretty(records)?;
    store.write(collection, bytes).await
}
