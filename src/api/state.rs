//! Application state for the Paid Throne API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::store::{PersistenceQueue, ResultStore};

/// Shared application state.
///
/// Holds the loaded configuration, the result store that statistics and
/// rankings read from, and the queue that writes new results to it.
#[derive(Clone)]
pub struct AppState {
    /// The loaded engine configuration.
    config: Arc<ConfigLoader>,
    /// Where results are read from.
    store: Arc<dyn ResultStore>,
    /// Where results are written to.
    queue: PersistenceQueue,
}

impl AppState {
    /// Creates the application state and starts the persistence writer.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(config: ConfigLoader, store: Arc<dyn ResultStore>) -> Self {
        let queue = PersistenceQueue::spawn(Arc::clone(&store));
        Self {
            config: Arc::new(config),
            store,
            queue,
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns a handle to the result store.
    pub fn store(&self) -> Arc<dyn ResultStore> {
        Arc::clone(&self.store)
    }

    /// Returns the persistence queue.
    pub fn queue(&self) -> &PersistenceQueue {
        &self.queue
    }
}
