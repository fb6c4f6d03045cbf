//! In-memory result store.

use std::sync::RwLock;

use crate::error::{EngineError, EngineResult};
use crate::models::StoredResult;

use super::ResultStore;

/// Keeps results in process memory. Contents are lost on restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    results: RwLock<Vec<StoredResult>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ResultStore for MemoryStore {
    fn save(&self, result: StoredResult) -> EngineResult<()> {
        self.results.write().map_err(|_| poisoned())?.push(result);
        Ok(())
    }

    fn load_all(&self) -> EngineResult<Vec<StoredResult>> {
        Ok(self.results.read().map_err(|_| poisoned())?.clone())
    }
}

fn poisoned() -> EngineError {
    EngineError::StorageError {
        message: "result store lock poisoned".to_string(),
    }
}
