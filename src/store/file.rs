use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;

use super::{RecordStore, StoreError};

// One `<collection>.json` file per collection under a single data directory.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub async fn ensure_dir(&self) -> Result<(), StoreError> {
        tokio::fs::create_dir_all(&self.dir).await?;
        Ok(())
    }

    fn path_for(&self, collection: &str) -> PathBuf {
        self.dir.join(format!("{collection}.json"))
    }
}

#[async_trait]
impl RecordStore for FileStore {
    async fn read(&self, collection: &str) -> Result<Option<Vec<u8>>, StoreError> {
        match tokio::fs::read(self.path_for(collection)).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Io(e)),
        }
    }

    async fn write(&self, collection: &str, bytes: Vec<u8>) -> Result<(), StoreError> {
        tokio::fs::write(self.path_for(collection), bytes).await?;
        Ok(())
    }
}
