//! Fire-and-forget persistence.
//!
//! Handlers submit results and return immediately. A single writer task
//! drains the queue and performs each save on the blocking pool, in
//! submission order. Failures are logged here and never reach the handler.
//! [`PersistenceQueue::shutdown`] flushes everything already submitted.

use std::sync::Arc;

use tokio::sync::{Mutex, Notify, mpsc};
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use crate::models::StoredResult;

use super::ResultStore;

/// Handle for queueing results to be written in the background.
///
/// Cloning is cheap; all clones feed the same writer task. The task exits
/// once every handle has been dropped and the queue is drained, or when
/// [`shutdown`](Self::shutdown) is called.
#[derive(Debug, Clone)]
pub struct PersistenceQueue {
    sender: mpsc::UnboundedSender<StoredResult>,
    closing: Arc<Notify>,
    writer: Arc<Mutex<Option<JoinHandle<()>>>>,
}

impl PersistenceQueue {
    /// Starts the writer task for `store`.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn spawn(store: Arc<dyn ResultStore>) -> Self {
        let (sender, mut receiver) = mpsc::unbounded_channel::<StoredResult>();
        let closing = Arc::new(Notify::new());
        let close_signal = Arc::clone(&closing);

        let writer = tokio::spawn(async move {
            loop {
                tokio::select! {
                    biased;
                    received = receiver.recv() => match received {
                        Some(result) => persist(&store, result).await,
                        None => break,
                    },
                    _ = close_signal.notified() => {
                        receiver.close();
                        while let Some(result) = receiver.recv().await {
                            persist(&store, result).await;
                        }
                        break;
                    }
                }
            }
            debug!("Persistence queue closed");
        });

        Self {
            sender,
            closing,
            writer: Arc::new(Mutex::new(Some(writer))),
        }
    }

    /// Queues a result for writing without waiting for it.
    pub fn submit(&self, result: StoredResult) {
        let id = result.id;
        if self.sender.send(result).is_err() {
            error!(result_id = %id, "Persistence queue closed; result dropped");
        }
    }

    /// Stops accepting results and waits until every queued result is saved.
    ///
    /// Results submitted through any clone after this call are dropped with
    /// an error log. Calling it again is a no-op.
    pub async fn shutdown(self) {
        self.closing.notify_one();
        drop(self.sender);

        let Some(writer) = self.writer.lock().await.take() else {
            return;
        };
        match writer.await {
            Ok(()) => info!("Persistence queue drained"),
            Err(err) => error!(error = %err, "Persistence writer failed during shutdown"),
        }
    }
}

async fn persist(store: &Arc<dyn ResultStore>, result: StoredResult) {
    let id = result.id;
    let store = Arc::clone(store);
    match tokio::task::spawn_blocking(move || store.save(result)).await {
        Ok(Ok(())) => debug!(result_id = %id, "Result persisted"),
        Ok(Err(err)) => error!(result_id = %id, error = %err, "Failed to persist result"),
        Err(err) => error!(result_id = %id, error = %err, "Persistence task panicked"),
    }
}
