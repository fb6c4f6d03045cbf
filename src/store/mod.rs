//! Persistence collaborator for calculation results.
//!
//! The engine never touches storage. Handlers hand each [`StoredResult`] to a
//! [`PersistenceQueue`], which writes it through a [`ResultStore`] in the
//! background. Statistics and rankings read the store on demand and see
//! whatever has been written by then.

mod file;
mod memory;
mod queue;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use queue::PersistenceQueue;

use crate::error::EngineResult;
use crate::models::StoredResult;

/// Storage for calculation results.
///
/// Implementations are blocking; async callers run them on the blocking pool.
pub trait ResultStore: Send + Sync {
    /// Persists one result.
    fn save(&self, result: StoredResult) -> EngineResult<()>;

    /// Returns every persisted result in insertion order.
    fn load_all(&self) -> EngineResult<Vec<StoredResult>>;
}
