use std::sync::Arc;
use tokio::sync::Mutex;

use crate::store::RecordStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RecordStore>,
    // Serializes load-modify-save sequences so concurrent mutations
    // cannot overwrite each other's collection rewrite.
    pub ledger_lock: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self {
            store,
            ledger_lock: Arc::new(Mutex::new(())),
        }
    }
}
